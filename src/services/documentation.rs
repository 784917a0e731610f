use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for LFG Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::list_games,
        crate::routes::game::create_ad,
        crate::routes::game::list_ads,
        crate::routes::ad::get_ad_discord,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::game::GameListItem,
            crate::dto::game::GameCounts,
            crate::dto::ad::CreateAdRequest,
            crate::dto::ad::AdRecord,
            crate::dto::ad::AdListing,
            crate::dto::ad::DiscordResponse,
            crate::dto::validation::FieldFailure,
            crate::dto::validation::RequestPart,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "games", description = "Game catalog and per-game ads"),
        (name = "ads", description = "Single ad lookups"),
    )
)]
pub struct ApiDoc;
