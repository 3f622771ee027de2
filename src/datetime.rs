use chrono::NaiveDateTime;
use crate::error::{DateField, NetherError, Result};

/// chrono pattern for the canonical `yyyy-MM-dd HHmm` form used on input and on disk.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H%M";

/// chrono pattern for the friendly `MMM dd yyyy, h:mma` form shown to the user.
pub const DISPLAY_FORMAT: &str = "%b %d %Y, %-I:%M%p";

/// Parses a date-time in the canonical form, e.g. `2024-03-15 1800`.
///
/// Surrounding whitespace is ignored. The shape is checked before chrono sees
/// the text because chrono alone would also accept unpadded fields.
pub fn parse_date_time(input: &str, field: DateField) -> Result<NaiveDateTime> {
    let s = input.trim();
    let invalid = || NetherError::InvalidDateTime { field, input: s.to_string() };

    if !has_canonical_shape(s) {
        return Err(invalid());
    }
    NaiveDateTime::parse_from_str(s, CANONICAL_FORMAT).map_err(|_| invalid())
}

/// `dddd-dd-dd dddd`, nothing more.
fn has_canonical_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 15 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        _ => b.is_ascii_digit(),
    })
}

pub fn format_canonical(dt: &NaiveDateTime) -> String {
    dt.format(CANONICAL_FORMAT).to_string()
}

pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

