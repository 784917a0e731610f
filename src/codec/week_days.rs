use super::CodecError;

/// Separator used between week days in the stored representation.
pub const WEEK_DAY_DELIMITER: &str = ",";

/// Join week days into their stored comma-separated form.
pub fn join_week_days(days: &[u8]) -> String {
    days.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(WEEK_DAY_DELIMITER)
}

/// Split a stored week-day string back into integers.
///
/// An empty string stands for an ad without any available day.
pub fn split_week_days(stored: &str) -> Result<Vec<u8>, CodecError> {
    if stored.is_empty() {
        return Ok(Vec::new());
    }

    stored
        .split(WEEK_DAY_DELIMITER)
        .map(|element| {
            element.parse::<u8>().map_err(|_| CodecError::WeekDay {
                element: element.to_owned(),
            })
        })
        .collect()
}
