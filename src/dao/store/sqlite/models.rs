use sqlx::FromRow;

use crate::dao::models::{AdListingEntity, GameListItemEntity};

/// Row produced by the game listing query.
#[derive(Debug, FromRow)]
pub(super) struct GameRow {
    pub id: String,
    pub name: String,
    pub banner_url: Option<String>,
    pub ad_count: i64,
}

impl From<GameRow> for GameListItemEntity {
    fn from(row: GameRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            banner_url: row.banner_url,
            ad_count: u64::try_from(row.ad_count).unwrap_or_default(),
        }
    }
}

/// Row produced by the ad listing projection.
#[derive(Debug, FromRow)]
pub(super) struct AdListingRow {
    pub id: String,
    pub name: String,
    pub week_days: String,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: i64,
    pub hour_end: i64,
}

impl From<AdListingRow> for AdListingEntity {
    fn from(row: AdListingRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            week_days: row.week_days,
            use_voice_channel: row.use_voice_channel,
            years_playing: row.years_playing,
            hour_start: row.hour_start,
            hour_end: row.hour_end,
        }
    }
}
