//! Date and time fields.

use chrono::{NaiveDate, NaiveTime};

/// Placeholders the acquirer writes instead of leaving a date blank.
const NULL_DATES: [&str; 2] = ["00000000", "01011001"];

/// Digit layouts used for dates in the extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// DDMMYYYY
    DayMonthYear,
    /// YYYYMMDD
    YearMonthDay,
    /// YYMMDD, always in the 2000s.
    ShortYearMonthDay,
}

impl DateLayout {
    fn width(self) -> usize {
        match self {
            Self::DayMonthYear | Self::YearMonthDay => 8,
            Self::ShortYearMonthDay => 6,
        }
    }
}

/// Parse a date field. Placeholders and impossible dates are `None`.
pub fn parse_date(digits: &str, layout: DateLayout) -> Option<NaiveDate> {
    let digits = digits.trim();
    if digits.is_empty() || NULL_DATES.contains(&digits) {
        return None;
    }
    if digits.len() != layout.width() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (year, month, day) = match layout {
        DateLayout::DayMonthYear => (
            number(&digits[4..8]),
            number(&digits[2..4]),
            number(&digits[0..2]),
        ),
        DateLayout::YearMonthDay => (
            number(&digits[0..4]),
            number(&digits[4..6]),
            number(&digits[6..8]),
        ),
        DateLayout::ShortYearMonthDay => (
            2000 + number(&digits[0..2]),
            number(&digits[2..4]),
            number(&digits[4..6]),
        ),
    };

    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Parse an HHMMSS time field. Wrong length or out-of-range parts are `None`.
pub fn parse_time(digits: &str) -> Option<NaiveTime> {
    let digits = digits.trim();
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveTime::from_hms_opt(
        number(&digits[0..2]),
        number(&digits[2..4]),
        number(&digits[4..6]),
    )
}

// Callers have already checked the slice is ASCII digits.
fn number(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}
