use futures::future::BoxFuture;
use sqlx::SqlitePool;
use time::{Duration, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use super::{
    config::SqliteConfig,
    connection::establish_pool,
    error::{SqliteDaoError, SqliteResult},
    models::{AdListingRow, GameRow},
};
use crate::dao::{
    models::{AdEntity, AdListingEntity, GameListItemEntity, NewAdEntity, NewGameEntity},
    storage::StorageResult,
    store::CatalogStore,
};

const LIST_GAMES_SQL: &str = "\
    SELECT g.id, g.name, g.banner_url, COUNT(a.id) AS ad_count \
    FROM games g LEFT JOIN ads a ON a.game_id = g.id \
    GROUP BY g.id, g.name, g.banner_url \
    ORDER BY g.name ASC, g.id ASC";

const INSERT_AD_SQL: &str = "\
    INSERT INTO ads (id, game_id, name, years_playing, discord, week_days, \
                     hour_start, hour_end, use_voice_channel, created_at) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

// rowid breaks ties between ads created within the same millisecond.
const LIST_ADS_SQL: &str = "\
    SELECT id, name, week_days, use_voice_channel, years_playing, hour_start, hour_end \
    FROM ads WHERE game_id = ? \
    ORDER BY created_at DESC, rowid DESC";

/// [`CatalogStore`] backed by a pooled SQLite database.
#[derive(Clone)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    /// Open the database described by `config` and make sure the schema exists.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        let pool = establish_pool(&config).await?;
        Ok(Self { pool })
    }

    /// Underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn ping(&self) -> SqliteResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn list_games(&self) -> SqliteResult<Vec<GameListItemEntity>> {
        let rows = sqlx::query_as::<_, GameRow>(LIST_GAMES_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::ListGames { source })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn seed_games(&self, games: Vec<NewGameEntity>) -> SqliteResult<usize> {
        let seed_error = |source| SqliteDaoError::SeedGames { source };

        let mut tx = self.pool.begin().await.map_err(seed_error)?;
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(&mut *tx)
            .await
            .map_err(seed_error)?;

        if existing > 0 {
            return Ok(0);
        }

        for game in &games {
            sqlx::query("INSERT INTO games (id, name, banner_url) VALUES (?, ?, ?)")
                .bind(Uuid::new_v4().to_string())
                .bind(&game.name)
                .bind(&game.banner_url)
                .execute(&mut *tx)
                .await
                .map_err(seed_error)?;
        }

        tx.commit().await.map_err(seed_error)?;
        info!(count = games.len(), "seeded game catalog");
        Ok(games.len())
    }

    async fn create_ad(&self, ad: NewAdEntity) -> SqliteResult<AdEntity> {
        let id = Uuid::new_v4().to_string();
        let created_at = now_millis_precision();
        let created_at_ms = (created_at.unix_timestamp_nanos() / 1_000_000) as i64;

        sqlx::query(INSERT_AD_SQL)
            .bind(&id)
            .bind(&ad.game_id)
            .bind(&ad.name)
            .bind(ad.years_playing)
            .bind(&ad.discord)
            .bind(&ad.week_days)
            .bind(i64::from(ad.hour_start))
            .bind(i64::from(ad.hour_end))
            .bind(ad.use_voice_channel)
            .bind(created_at_ms)
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::CreateAd {
                game_id: ad.game_id.clone(),
                source,
            })?;

        Ok(AdEntity {
            id,
            game_id: ad.game_id,
            name: ad.name,
            years_playing: ad.years_playing,
            discord: ad.discord,
            week_days: ad.week_days,
            hour_start: ad.hour_start,
            hour_end: ad.hour_end,
            use_voice_channel: ad.use_voice_channel,
            created_at,
        })
    }

    async fn list_ads_for_game(&self, game_id: String) -> SqliteResult<Vec<AdListingEntity>> {
        let rows = sqlx::query_as::<_, AdListingRow>(LIST_ADS_SQL)
            .bind(&game_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::ListAds {
                game_id: game_id.clone(),
                source,
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_ad_discord(&self, ad_id: String) -> SqliteResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT discord FROM ads WHERE id = ?")
            .bind(&ad_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::LoadAd {
                ad_id: ad_id.clone(),
                source,
            })
    }
}

/// Current instant truncated to the millisecond stored in `ads.created_at`.
fn now_millis_precision() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000_000))
}

impl CatalogStore for SqliteCatalogStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameListItemEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn seed_games(&self, games: Vec<NewGameEntity>) -> BoxFuture<'static, StorageResult<usize>> {
        let store = self.clone();
        Box::pin(async move { store.seed_games(games).await.map_err(Into::into) })
    }

    fn create_ad(&self, ad: NewAdEntity) -> BoxFuture<'static, StorageResult<AdEntity>> {
        let store = self.clone();
        Box::pin(async move { store.create_ad(ad).await.map_err(Into::into) })
    }

    fn list_ads_for_game(
        &self,
        game_id: String,
    ) -> BoxFuture<'static, StorageResult<Vec<AdListingEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_ads_for_game(game_id).await.map_err(Into::into) })
    }

    fn find_ad_discord(&self, ad_id: String) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let store = self.clone();
        Box::pin(async move { store.find_ad_discord(ad_id).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }
}
