//! Text → [`Duration`] for the `"<int> <unit>"` schema used throughout
//! configuration (trigger periods, timing-monitor budgets).

use std::time::Duration;

use crate::error::InvalidArgumentError;

/// Parses strings of the form `"<leading integer><anything><unit>"` where
/// `unit` is one of `nanoseconds | microseconds | milliseconds | seconds`.
///
/// The unit is matched by substring containment, not by exact suffix, and
/// checked in this order: `nanoseconds`, `microseconds`, `milliseconds`,
/// `seconds`. That order matters — `"milliseconds"` itself contains
/// `"seconds"` as a substring, so `milliseconds` must be tried first or
/// every millisecond value would parse as seconds.
pub fn parse_duration(text: &str) -> Result<Duration, InvalidArgumentError> {
    let value = leading_integer(text)
        .ok_or_else(|| InvalidArgumentError(format!("invalid duration format: {text:?}")))?;

    if text.contains("nanoseconds") {
        Ok(Duration::from_nanos(value))
    } else if text.contains("microseconds") {
        Ok(Duration::from_micros(value))
    } else if text.contains("milliseconds") {
        Ok(Duration::from_millis(value))
    } else if text.contains("seconds") {
        Ok(Duration::from_secs(value))
    } else {
        Err(InvalidArgumentError(format!(
            "invalid duration format: {text:?}"
        )))
    }
}

/// Parses the leading run of ASCII digits (optionally signed, though a
/// negative duration is rejected downstream by `Duration::from_*`'s `u64`
/// argument), mirroring `std::stoi`'s leading-numeric-prefix behavior.
fn leading_integer(text: &str) -> Option<u64> {
    let trimmed = text.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_unit() {
        assert_eq!(
            parse_duration("150 nanoseconds").unwrap(),
            Duration::from_nanos(150)
        );
        assert_eq!(
            parse_duration("150 microseconds").unwrap(),
            Duration::from_micros(150)
        );
        assert_eq!(
            parse_duration("150 milliseconds").unwrap(),
            Duration::from_millis(150)
        );
        assert_eq!(
            parse_duration("150 seconds").unwrap(),
            Duration::from_secs(150)
        );
    }

    #[test]
    fn milliseconds_is_not_shadowed_by_its_seconds_substring() {
        assert_eq!(
            parse_duration("2 milliseconds").unwrap(),
            Duration::from_millis(2)
        );
    }

    #[test]
    fn unknown_unit_is_invalid_argument() {
        assert!(parse_duration("2 fortnights").is_err());
    }

    #[test]
    fn missing_leading_integer_is_invalid_argument() {
        assert!(parse_duration("milliseconds").is_err());
    }

    #[test]
    fn empty_string_is_invalid_argument() {
        assert!(parse_duration("").is_err());
    }

    proptest::proptest! {
        #[test]
        fn any_nonnegative_count_round_trips_through_each_unit(n in 0u64..1_000_000) {
            let ns = parse_duration(&format!("{n} nanoseconds")).unwrap();
            proptest::prop_assert_eq!(ns, Duration::from_nanos(n));
            let us = parse_duration(&format!("{n} microseconds")).unwrap();
            proptest::prop_assert_eq!(us, Duration::from_micros(n));
            let ms = parse_duration(&format!("{n} milliseconds")).unwrap();
            proptest::prop_assert_eq!(ms, Duration::from_millis(n));
            let s = parse_duration(&format!("{n} seconds")).unwrap();
            proptest::prop_assert_eq!(s, Duration::from_secs(n));
        }
    }
}
