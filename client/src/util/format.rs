//! Display and parsing helpers for admin pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable byte count with two decimals (`1536` → `"1.50KB"`).
///
/// Values at or beyond 1024 TB stay in TB.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let mut size = bytes as f64;
    let mut idx = 0;
    while size >= 1024.0 && idx < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        idx += 1;
    }
    format!("{size:.2}{}", SIZE_UNITS[idx])
}

/// Parse the leading decimal integer of `value`, falling back to `default`.
///
/// Leading whitespace and a single sign are accepted and trailing garbage is
/// ignored (`"12px"` → `12`). Absent, empty, non-numeric, or out-of-range
/// input yields `default`.
#[must_use]
pub fn to_int(value: Option<&str>, default: Option<i64>) -> Option<i64> {
    let Some(raw) = value.map(str::trim_start).filter(|v| !v.is_empty()) else {
        return default;
    };

    let (sign, rest) = match raw.as_bytes()[0] {
        b'-' => ("-", &raw[1..]),
        b'+' => ("", &raw[1..]),
        _ => ("", raw),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return default;
    }

    format!("{sign}{}", &rest[..digits_len]).parse::<i64>().ok().or(default)
}
