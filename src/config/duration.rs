//! Duration strings in the `1m30s` / `250ms` notation used by component metadata

use std::fmt::Write;
use std::time::Duration;

/// Parse a duration string like "300ms", "5s", "1m30s", "1.5h".
///
/// Every number needs a unit (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`); the only
/// unit-less value accepted is `0`.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    if s.starts_with('-') {
        return Err(format!("negative duration not allowed: '{s}'"));
    }
    let s = s.strip_prefix('+').unwrap_or(s);
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total_nanos = 0f64;
    let mut rest = s;

    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_len == 0 {
            return Err(format!("Invalid duration: '{s}'"));
        }
        let value: f64 = rest[..num_len]
            .parse()
            .map_err(|_| format!("Invalid number in duration: '{s}'"))?;
        rest = &rest[num_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let scale = match unit {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            "" => return Err(format!("Missing unit in duration: '{s}'")),
            other => return Err(format!("Unknown duration unit '{other}' in '{s}'")),
        };
        total_nanos += value * scale;
    }

    let total_nanos = total_nanos.round();
    if !total_nanos.is_finite() || total_nanos >= u64::MAX as f64 {
        return Err(format!("duration out of range: '{s}'"));
    }
    Ok(Duration::from_nanos(total_nanos as u64))
}

/// Render a duration the way `parse_duration` reads it, e.g. "1.5ms" or "1h2m3s".
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{}µs", with_fraction(nanos, 1_000));
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", with_fraction(nanos, 1_000_000));
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let second_nanos = nanos - u128::from(hours * 3600 + minutes * 60) * 1_000_000_000;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{}s", with_fraction(second_nanos, 1_000_000_000));
    out
}

fn with_fraction(value: u128, unit: u128) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }
    let width = unit.to_string().len() - 1;
    let digits = format!("{frac:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
