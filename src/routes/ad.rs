use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    dto::{
        ad::DiscordResponse,
        validation::{self, IdParams},
    },
    error::AppError,
    routes::path_params,
    services::query_service,
    state::SharedState,
};

const GET_DISCORD_FAILED: &str = "Failed to fetch the discord of the given ad";

/// Routes addressing a single ad.
pub fn router() -> Router<SharedState> {
    Router::new().route("/ads/{id}/discord", get(get_ad_discord))
}

/// Return the discord handle of an ad.
#[utoipa::path(
    get,
    path = "/ads/{id}/discord",
    tag = "ads",
    params(("id" = String, Path, description = "Identifier of the ad")),
    responses(
        (status = 200, description = "Discord handle", body = DiscordResponse),
        (status = 400, description = "Invalid parameters or store failure", body = crate::error::ErrorBody),
        (status = 404, description = "No ad with this identifier", body = crate::error::ErrorBody)
    )
)]
pub async fn get_ad_discord(
    State(state): State<SharedState>,
    params: Result<Path<IdParams>, PathRejection>,
) -> Result<Json<DiscordResponse>, AppError> {
    let IdParams { id } =
        validation::require_params(validation::validate_params(path_params(params)))?;

    let discord = query_service::get_ad_discord(state.store(), id)
        .await
        .map_err(|err| AppError::from_service(err, GET_DISCORD_FAILED))?;
    Ok(Json(discord))
}
