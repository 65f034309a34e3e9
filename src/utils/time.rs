//! Duration utilities: parsing "7h30m"-style strings and rendering spans.

use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;

/// Parse a duration such as `8h`, `45m`, `7h30m` or `1h2m3s`.
pub fn parse_duration(s: &str) -> AppResult<TimeDelta> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let mut total = TimeDelta::zero();
    let mut digits = String::new();

    for c in trimmed.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let n: i64 = digits
            .parse()
            .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
        digits.clear();

        total += match c.to_ascii_lowercase() {
            'h' => TimeDelta::hours(n),
            'm' => TimeDelta::minutes(n),
            's' => TimeDelta::seconds(n),
            _ => return Err(AppError::InvalidDuration(s.to_string())),
        };
    }

    // trailing number without unit
    if !digits.is_empty() {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    Ok(total)
}

/// Render as `1h02m03s`, `5m00s` or `42s`. Negative spans get a leading `-`.
pub fn format_duration(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let secs = d.num_seconds().abs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    if h > 0 {
        format!("{sign}{h}h{m:02}m{s:02}s")
    } else if m > 0 {
        format!("{sign}{m}m{s:02}s")
    } else {
        format!("{sign}{s}s")
    }
}
