use crate::app::domain::CalendarDate;
use crate::app::infrastructure::error::{DateError, Result};

/// Byte offsets of the two separators in `YYYY-MM-DD`
const SEPARATORS: [usize; 2] = [4, 7];
const DATE_LEN: usize = 10;

/// Parse a strict `YYYY-MM-DD` string into a calendar date.
///
/// The input must be exactly ten ASCII characters: a four digit year, a two
/// digit month and a two digit day joined by hyphens. Surrounding whitespace,
/// signs and unpadded fields are rejected, as are dates that do not exist
/// (month 13, April 31st, February 29th outside leap years).
pub fn parse(s: &str) -> Result<CalendarDate> {
    let invalid = || DateError::InvalidFormat(s.to_string());

    let bytes = s.as_bytes();
    if bytes.len() != DATE_LEN {
        return Err(invalid());
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| {
        if SEPARATORS.contains(&i) {
            *b == b'-'
        } else {
            b.is_ascii_digit()
        }
    });
    if !well_formed {
        return Err(invalid());
    }

    // All ASCII digits from here on, so these slices and parses cannot fail
    let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = s[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = s[8..10].parse().map_err(|_| invalid())?;

    CalendarDate::from_ymd(year, month, day).ok_or_else(invalid)
}
