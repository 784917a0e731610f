use tracing::info;

use crate::{
    codec,
    dao::{models::NewAdEntity, store::CatalogStore},
    dto::ad::{AdListing, AdRecord, CreateAdRequest},
    error::ServiceError,
};

/// Persist a new ad for `game_id` and return it in its stored form.
pub async fn create_ad(
    store: &dyn CatalogStore,
    game_id: String,
    request: CreateAdRequest,
) -> Result<AdRecord, ServiceError> {
    let ad = build_new_ad(game_id, request)?;
    let created = store.create_ad(ad).await?;

    info!(ad_id = %created.id, game_id = %created.game_id, "ad created");
    Ok(created.into())
}

/// List the ads of a game, newest first, converted for display.
pub async fn list_ads_for_game(
    store: &dyn CatalogStore,
    game_id: String,
) -> Result<Vec<AdListing>, ServiceError> {
    let ads = store.list_ads_for_game(game_id).await?;

    ads.into_iter()
        .map(|ad| {
            let id = ad.id.clone();
            AdListing::try_from(ad).map_err(|source| ServiceError::CorruptRecord { id, source })
        })
        .collect()
}

fn build_new_ad(game_id: String, request: CreateAdRequest) -> Result<NewAdEntity, ServiceError> {
    let CreateAdRequest {
        name,
        years_playing,
        discord,
        week_days,
        hour_start,
        hour_end,
        use_voice_channel,
    } = request;

    let to_minutes = |hour: &str| {
        codec::to_minutes(hour).map_err(|err| ServiceError::InvalidInput(err.to_string()))
    };

    Ok(NewAdEntity {
        game_id,
        name,
        years_playing,
        discord,
        week_days: codec::join_week_days(&week_days),
        hour_start: to_minutes(&hour_start)?,
        hour_end: to_minutes(&hour_end)?,
        use_voice_channel,
    })
}
