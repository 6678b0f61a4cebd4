/// Duration used when no valid duration has been stored.
pub const DEFAULT_MINUTES: u32 = 35;

/// Parses a stored duration in whole minutes.
///
/// Missing, unparsable and non-positive values yield [`DEFAULT_MINUTES`].
#[must_use]
pub fn parse_minutes(value: Option<&str>) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&minutes| minutes > 0)
        .unwrap_or(DEFAULT_MINUTES)
}

/// Formats seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours, so 100 minutes is `100:00`.
#[must_use]
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{DEFAULT_MINUTES, format_mm_ss, parse_minutes};

    #[test]
    fn test_format_pads_both_fields() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(35 * 60), "35:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(100 * 60 + 9), "100:09");
    }

    #[test]
    fn test_parse_minutes_falls_back_to_default() {
        assert_eq!(parse_minutes(None), DEFAULT_MINUTES);
        assert_eq!(parse_minutes(Some("")), DEFAULT_MINUTES);
        assert_eq!(parse_minutes(Some("0")), DEFAULT_MINUTES);
        assert_eq!(parse_minutes(Some("-5")), DEFAULT_MINUTES);
        assert_eq!(parse_minutes(Some("ten")), DEFAULT_MINUTES);
        assert_eq!(parse_minutes(Some("20")), 20);
    }

    proptest! {
        #[test]
        fn test_format_round_trips_through_fields(seconds in 0u32..1_000_000) {
            let text = format_mm_ss(seconds);
            let (minutes, secs) = text.split_once(':').unwrap();
            prop_assert_eq!(secs.len(), 2);
            prop_assert!(minutes.len() >= 2);
            let minutes: u32 = minutes.parse().unwrap();
            let secs: u32 = secs.parse().unwrap();
            prop_assert_eq!(minutes * 60 + secs, seconds);
        }
    }
}
