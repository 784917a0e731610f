pub mod sqlite;

use crate::dao::models::{
    AdEntity, AdListingEntity, GameListItemEntity, NewAdEntity, NewGameEntity,
};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the relational store holding games and their ads.
pub trait CatalogStore: Send + Sync {
    /// Every game along with its ad count, ordered by name.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameListItemEntity>>>;
    /// Insert the given games when the catalog is empty; returns how many were inserted.
    fn seed_games(&self, games: Vec<NewGameEntity>) -> BoxFuture<'static, StorageResult<usize>>;
    /// Persist a new ad and return the stored record.
    fn create_ad(&self, ad: NewAdEntity) -> BoxFuture<'static, StorageResult<AdEntity>>;
    /// Ads of a game, most recently created first.
    fn list_ads_for_game(
        &self,
        game_id: String,
    ) -> BoxFuture<'static, StorageResult<Vec<AdListingEntity>>>;
    /// Discord handle of a single ad, `None` when no ad has that identifier.
    fn find_ad_discord(&self, ad_id: String) -> BoxFuture<'static, StorageResult<Option<String>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
