use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod ad;
pub mod game;
pub mod health;
pub mod validation;

fn format_timestamp(time: OffsetDateTime) -> String {
    time.format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
