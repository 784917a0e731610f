/// Ad creation and per-game listings.
pub mod ad_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Read-only queries over the game catalog and ad contacts.
pub mod query_service;
