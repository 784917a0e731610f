use time::OffsetDateTime;

/// Game catalog entry as persisted, together with the number of ads attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameListItemEntity {
    /// Stable identifier for the game.
    pub id: String,
    /// Display name of the game.
    pub name: String,
    /// Optional cover image shown by clients.
    pub banner_url: Option<String>,
    /// Number of ads referencing the game.
    pub ad_count: u64,
}

/// Catalog entry inserted when seeding an empty store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameEntity {
    pub name: String,
    pub banner_url: Option<String>,
}

/// Ad ready to be written, with every field already in its stored form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdEntity {
    /// Game the ad is posted for; must reference an existing game.
    pub game_id: String,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    /// Comma-joined week days.
    pub week_days: String,
    /// Minutes since midnight.
    pub hour_start: u16,
    /// Minutes since midnight.
    pub hour_end: u16,
    pub use_voice_channel: bool,
}

/// Ad as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdEntity {
    /// Identifier generated by the store.
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: u16,
    pub hour_end: u16,
    pub use_voice_channel: bool,
    /// Creation instant, millisecond precision.
    pub created_at: OffsetDateTime,
}

/// Projection of an ad used when listing the ads of a game.
///
/// Hours are kept as raw integers so that corrupted rows surface as codec
/// failures instead of being silently clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdListingEntity {
    pub id: String,
    pub name: String,
    pub week_days: String,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: i64,
    pub hour_end: i64,
}
