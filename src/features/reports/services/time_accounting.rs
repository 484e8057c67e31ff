//! Net worked-hours computation from raw form strings.
//!
//! All functions here are pure and deterministic. Malformed input never
//! raises: a time that does not parse makes the net-hours figure
//! uncomputable (`None`), and a numeric field that does not parse
//! coerces to 0.0.

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse an `HH:MM` string into minutes since midnight.
///
/// Both sides of the colon must be integers; anything else is `None`.
/// Hour and minute values are deliberately not range-checked, so "25:99"
/// parses. Matches the recorded intake behavior of the paper forms.
pub fn parse_time_to_minutes(hhmm: &str) -> Option<i32> {
    let s = hhmm.trim();
    let (h, m) = s.split_once(':')?;
    let h: i32 = h.trim().parse().ok()?;
    let m: i32 = m.trim().parse().ok()?;
    Some(h * 60 + m)
}

/// Coerce a form value into a non-negative float.
///
/// Comma decimal separators are normalized to dots. Empty, unparsable,
/// and negative values all coerce to 0.0 rather than failing.
pub fn to_float_nonneg(value: &str) -> f64 {
    let s = value.trim().replace(',', ".");
    if s.is_empty() {
        return 0.0;
    }
    match s.parse::<f64>() {
        Ok(n) if n >= 0.0 => n,
        _ => 0.0,
    }
}

/// Net hours = (end − start) − break, floored at zero, rounded to two
/// decimal places. A shift ending before it starts is assumed to cross
/// midnight. `None` when either clock time is unparsable.
pub fn compute_net_hours(start: &str, end: &str, break_hours: f64) -> Option<f64> {
    let start_min = parse_time_to_minutes(start)?;
    let end_min = parse_time_to_minutes(end)?;

    let mut diff = end_min - start_min;
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }

    let net = (f64::from(diff) / 60.0 - break_hours).max(0.0);
    Some((net * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_times() {
        assert_eq!(parse_time_to_minutes("08:00"), Some(480));
        assert_eq!(parse_time_to_minutes("00:00"), Some(0));
        assert_eq!(parse_time_to_minutes(" 16:30 "), Some(990));
    }

    #[test]
    fn out_of_range_times_still_parse() {
        // no range validation on hour/minute
        assert_eq!(parse_time_to_minutes("25:99"), Some(25 * 60 + 99));
    }

    #[test]
    fn malformed_times_yield_none() {
        assert_eq!(parse_time_to_minutes(""), None);
        assert_eq!(parse_time_to_minutes("abc"), None);
        assert_eq!(parse_time_to_minutes("0800"), None);
        assert_eq!(parse_time_to_minutes("8:xx"), None);
        assert_eq!(parse_time_to_minutes("8.5:00"), None);
    }

    #[test]
    fn ordinary_shift() {
        assert_eq!(compute_net_hours("08:00", "16:30", 0.5), Some(8.0));
    }

    #[test]
    fn midnight_wraparound() {
        assert_eq!(compute_net_hours("22:00", "06:00", 0.0), Some(8.0));
    }

    #[test]
    fn break_exceeding_worked_time_floors_at_zero() {
        assert_eq!(compute_net_hours("08:00", "09:00", 5.0), Some(0.0));
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 8h20m - 0.25h = 8.0833... -> 8.08
        assert_eq!(compute_net_hours("08:00", "16:20", 0.25), Some(8.08));
    }

    #[test]
    fn unparsable_endpoint_makes_hours_uncomputable() {
        assert_eq!(compute_net_hours("abc", "16:30", 0.0), None);
        assert_eq!(compute_net_hours("08:00", "", 0.0), None);
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(to_float_nonneg("3,5"), 3.5);
        assert_eq!(to_float_nonneg("0.25"), 0.25);
        assert_eq!(to_float_nonneg("-2"), 0.0);
        assert_eq!(to_float_nonneg(""), 0.0);
        assert_eq!(to_float_nonneg("  "), 0.0);
        assert_eq!(to_float_nonneg("abc"), 0.0);
    }
}
