//! Read-only queries over the game catalog and ad contacts.

use tracing::info;

use crate::{
    dao::{models::NewGameEntity, store::CatalogStore},
    dto::{ad::DiscordResponse, game::GameListItem},
    error::ServiceError,
};

/// Every game in the catalog together with its ad count.
pub async fn list_games(store: &dyn CatalogStore) -> Result<Vec<GameListItem>, ServiceError> {
    let games = store.list_games().await?;
    Ok(games.into_iter().map(GameListItem::from).collect())
}

/// Discord handle of the ad identified by `ad_id`.
pub async fn get_ad_discord(
    store: &dyn CatalogStore,
    ad_id: String,
) -> Result<DiscordResponse, ServiceError> {
    let Some(discord) = store.find_ad_discord(ad_id.clone()).await? else {
        return Err(ServiceError::NotFound(format!("ad `{ad_id}` not found")));
    };
    Ok(DiscordResponse { discord })
}

/// Fill an empty catalog with `games`; existing catalogs are left untouched.
pub async fn seed_catalog(
    store: &dyn CatalogStore,
    games: &[NewGameEntity],
) -> Result<usize, ServiceError> {
    let inserted = store.seed_games(games.to_vec()).await?;
    if inserted == 0 {
        info!("game catalog already populated; skipping seed");
    }
    Ok(inserted)
}
