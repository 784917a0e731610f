use axum::{
    Json, Router,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

pub mod ad;
pub mod game;
pub mod health;

/// Compose all route trees, wiring in shared state and the Swagger UI.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(game::router())
        .merge(ad::router());

    let docs_router: Router<SharedState> = SwaggerUi::new("/docs")
        .url("/api-doc/openapi.json", ApiDoc::openapi())
        .into();

    api_router.merge(docs_router).with_state(state)
}

/// Unwrap path parameters, keeping the rejection text so the validator can report it.
fn path_params<P>(extracted: Result<Path<P>, PathRejection>) -> Result<P, String> {
    extracted
        .map(|Path(params)| params)
        .map_err(|rejection| rejection.body_text())
}

/// Unwrap a raw JSON body, keeping the rejection text so the validator can report it.
fn json_body(
    extracted: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<serde_json::Value, String> {
    extracted
        .map(|Json(body)| body)
        .map_err(|rejection| rejection.body_text())
}
