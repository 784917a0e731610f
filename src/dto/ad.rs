use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    codec::{self, CodecError},
    dao::models::{AdEntity, AdListingEntity},
    dto::{
        format_timestamp,
        validation::{validate_hour, validate_week_day},
    },
};

/// Payload used to post a new ad for a game. Every field is required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    /// Name the poster goes by in game.
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    /// Days of the week the poster is available, 0 (Sunday) to 6 (Saturday).
    pub week_days: Vec<u8>,
    /// Start of the daily availability window, `HH:MM`.
    pub hour_start: String,
    /// End of the daily availability window, `HH:MM`.
    pub hour_end: String,
    pub use_voice_channel: bool,
}

impl Validate for CreateAdRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.years_playing < 0 {
            let mut err = ValidationError::new("range");
            err.message = Some("Years playing must not be negative".into());
            errors.add("yearsPlaying", err);
        }

        for day in &self.week_days {
            if let Err(e) = validate_week_day(*day) {
                errors.add("weekDays", e);
            }
        }

        if let Err(e) = validate_hour(&self.hour_start) {
            errors.add("hourStart", e);
        }
        if let Err(e) = validate_hour(&self.hour_end) {
            errors.add("hourEnd", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Ad exactly as stored: week days joined, hours in minutes since midnight.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    #[schema(example = "1,3,5")]
    pub week_days: String,
    #[schema(example = 480)]
    pub hour_start: u16,
    #[schema(example = 630)]
    pub hour_end: u16,
    pub use_voice_channel: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<AdEntity> for AdRecord {
    fn from(ad: AdEntity) -> Self {
        Self {
            id: ad.id,
            game_id: ad.game_id,
            name: ad.name,
            years_playing: ad.years_playing,
            discord: ad.discord,
            week_days: ad.week_days,
            hour_start: ad.hour_start,
            hour_end: ad.hour_end,
            use_voice_channel: ad.use_voice_channel,
            created_at: format_timestamp(ad.created_at),
        }
    }
}

/// Ad as displayed in a game's listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdListing {
    pub id: String,
    pub name: String,
    pub week_days: Vec<u8>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    #[schema(example = "08:00")]
    pub hour_start: String,
    #[schema(example = "10:30")]
    pub hour_end: String,
}

impl TryFrom<AdListingEntity> for AdListing {
    type Error = CodecError;

    fn try_from(ad: AdListingEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            week_days: codec::split_week_days(&ad.week_days)?,
            hour_start: codec::to_display(ad.hour_start)?,
            hour_end: codec::to_display(ad.hour_end)?,
            id: ad.id,
            name: ad.name,
            use_voice_channel: ad.use_voice_channel,
            years_playing: ad.years_playing,
        })
    }
}

/// Contact handle of a single ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DiscordResponse {
    pub discord: String,
}
