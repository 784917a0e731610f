use std::sync::Arc;

use crate::dao::store::CatalogStore;

pub type SharedState = Arc<AppState>;

/// Process-wide state created at startup and handed to every request handler.
pub struct AppState {
    store: Arc<dyn CatalogStore>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: Arc<dyn CatalogStore>) -> SharedState {
        Arc::new(Self { store })
    }

    /// Store holding the game catalog and ads.
    pub fn store(&self) -> &dyn CatalogStore {
        self.store.as_ref()
    }
}
