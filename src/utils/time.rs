//! Time utilities: parsing duration expressions and formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::Duration;

/// Parse a duration expression like `1h30m`, `45m` or `90s`.
///
/// The expression is a sequence of `<number><unit>` components with units
/// `h`, `m` and `s`. Repeated units are summed.
pub fn parse_duration(spec: &str) -> AppResult<Duration> {
    let trimmed = spec.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidDuration("empty expression".to_string()));
    }

    let mut total_secs: i64 = 0;
    let mut digits = String::new();

    for c in trimmed.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let value: i64 = digits
            .parse()
            .map_err(|_| AppError::InvalidDuration(spec.to_string()))?;
        digits.clear();

        let unit_secs = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(AppError::InvalidDuration(spec.to_string())),
        };
        total_secs += value * unit_secs;
    }

    // A trailing number without a unit is malformed
    if !digits.is_empty() {
        return Err(AppError::InvalidDuration(spec.to_string()));
    }

    Ok(Duration::seconds(total_secs))
}

/// Render a duration as `<hours>h <minutes>m <seconds>s`.
///
/// All three components derive from the same total so they can never drift
/// apart: `3h5m9s` becomes `"3h 5m 9s"`, 90 seconds becomes `"0h 1m 30s"`.
pub fn format_duration(d: Duration) -> String {
    let total = d.num_seconds();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_expression() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
    }

    #[test]
    fn parses_single_units() {
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("45m").unwrap(), Duration::minutes(45));
        assert_eq!(parse_duration("90s").unwrap(), Duration::seconds(90));
    }

    #[test]
    fn sums_repeated_units() {
        assert_eq!(parse_duration("1h1h").unwrap(), Duration::hours(2));
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("90").is_err());
        assert!(parse_duration("1h30").is_err());
        assert!(parse_duration("1x").is_err());
    }

    #[test]
    fn formats_all_components() {
        let d = Duration::hours(3) + Duration::minutes(5) + Duration::seconds(9);
        assert_eq!(format_duration(d), "3h 5m 9s");
    }

    #[test]
    fn formats_seconds_rolling_into_minutes() {
        assert_eq!(format_duration(Duration::seconds(90)), "0h 1m 30s");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_duration(Duration::zero()), "0h 0m 0s");
    }
}
