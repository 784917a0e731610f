use super::CodecError;

/// Number of minutes in a day; valid minute-of-day values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Convert a zero-padded `HH:MM` string into the number of minutes since midnight.
///
/// ```ignore
/// to_minutes("08:00") // Ok(480)
/// to_minutes("8:00")  // Err - not zero-padded
/// to_minutes("24:00") // Err - hour out of range
/// ```
pub fn to_minutes(display: &str) -> Result<u16, CodecError> {
    let format_error = || CodecError::Format {
        input: display.to_owned(),
    };

    let (hours, minutes) = display.split_once(':').ok_or_else(format_error)?;
    let hours = parse_two_digits(hours).ok_or_else(format_error)?;
    let minutes = parse_two_digits(minutes).ok_or_else(format_error)?;

    if hours > 23 || minutes > 59 {
        return Err(format_error());
    }

    Ok(hours * 60 + minutes)
}

/// Render a minute-of-day count as a zero-padded `HH:MM` string.
pub fn to_display(minutes: i64) -> Result<String, CodecError> {
    if !(0..i64::from(MINUTES_PER_DAY)).contains(&minutes) {
        return Err(CodecError::Range { minutes });
    }

    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

fn parse_two_digits(part: &str) -> Option<u16> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_display_to_minutes() {
        assert_eq!(to_minutes("00:00"), Ok(0));
        assert_eq!(to_minutes("08:00"), Ok(480));
        assert_eq!(to_minutes("10:30"), Ok(630));
        assert_eq!(to_minutes("23:59"), Ok(1439));
    }

    #[test]
    fn rejects_malformed_display() {
        for input in [
            "", "8:00", "08:0", "0800", "08-00", "24:00", "12:60", "ab:cd", "+1:00", "08:00:00",
            " 8:00",
        ] {
            assert!(
                matches!(to_minutes(input), Err(CodecError::Format { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn converts_minutes_to_display() {
        assert_eq!(to_display(0).as_deref(), Ok("00:00"));
        assert_eq!(to_display(480).as_deref(), Ok("08:00"));
        assert_eq!(to_display(630).as_deref(), Ok("10:30"));
        assert_eq!(to_display(1439).as_deref(), Ok("23:59"));
    }

    #[test]
    fn rejects_out_of_range_minutes() {
        assert_eq!(to_display(-1), Err(CodecError::Range { minutes: -1 }));
        assert_eq!(to_display(1440), Err(CodecError::Range { minutes: 1440 }));
        assert!(to_display(i64::MAX).is_err());
    }

    #[test]
    fn every_minute_of_the_day_round_trips() {
        for minutes in 0..MINUTES_PER_DAY {
            let display = to_display(i64::from(minutes)).unwrap();
            assert_eq!(to_minutes(&display), Ok(minutes));
            assert_eq!(to_display(i64::from(to_minutes(&display).unwrap())), Ok(display));
        }
    }
}
