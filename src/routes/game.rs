use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{
        ad::{AdListing, AdRecord, CreateAdRequest},
        game::GameListItem,
        validation::{self, IdParams},
    },
    error::AppError,
    routes::{json_body, path_params},
    services::{ad_service, query_service},
    state::SharedState,
};

const LIST_GAMES_FAILED: &str = "Failed to list games";
const CREATE_AD_FAILED: &str = "Failed to create an ad for the given game";
const LIST_ADS_FAILED: &str = "Failed to list ads for the given game";

/// Routes exposing the game catalog and the ads posted for each game.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/{id}/ads", get(list_ads).post(create_ad))
}

/// List every game with the number of ads posted for it.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses(
        (status = 200, description = "Game catalog", body = [GameListItem]),
        (status = 400, description = "Store failure", body = crate::error::ErrorBody)
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameListItem>>, AppError> {
    let games = query_service::list_games(state.store())
        .await
        .map_err(|err| AppError::from_service(err, LIST_GAMES_FAILED))?;
    Ok(Json(games))
}

/// Post a new ad for a game.
#[utoipa::path(
    post,
    path = "/games/{id}/ads",
    tag = "games",
    params(("id" = String, Path, description = "Identifier of the game")),
    request_body = CreateAdRequest,
    responses(
        (status = 201, description = "Ad created", body = AdRecord),
        (status = 400, description = "Invalid parameters or body, or store failure", body = crate::error::ErrorBody)
    )
)]
pub async fn create_ad(
    State(state): State<SharedState>,
    params: Result<Path<IdParams>, PathRejection>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AdRecord>), AppError> {
    let (IdParams { id }, request) = validation::combine(
        validation::validate_params(path_params(params)),
        validation::parse_body::<CreateAdRequest>(json_body(body)),
    )?;

    let ad = ad_service::create_ad(state.store(), id, request)
        .await
        .map_err(|err| AppError::from_service(err, CREATE_AD_FAILED))?;
    Ok((StatusCode::CREATED, Json(ad)))
}

/// List the ads of a game, most recent first.
#[utoipa::path(
    get,
    path = "/games/{id}/ads",
    tag = "games",
    params(("id" = String, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Ads of the game, newest first", body = [AdListing]),
        (status = 400, description = "Invalid parameters or store failure", body = crate::error::ErrorBody)
    )
)]
pub async fn list_ads(
    State(state): State<SharedState>,
    params: Result<Path<IdParams>, PathRejection>,
) -> Result<Json<Vec<AdListing>>, AppError> {
    let IdParams { id } =
        validation::require_params(validation::validate_params(path_params(params)))?;

    let ads = ad_service::list_ads_for_game(state.store(), id)
        .await
        .map_err(|err| AppError::from_service(err, LIST_ADS_FAILED))?;
    Ok(Json(ads))
}
