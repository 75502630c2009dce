use crate::errors::GrowthError;
use chrono::{Datelike, Duration, NaiveDate};
use std::ops::RangeInclusive;

/// Parses a `D.M.YYYY` date such as `19.4.2025`.
///
/// Day and month are one or two digits, zero padded or not, and the year is
/// exactly four. Signs, spaces inside parts and impossible days are rejected.
pub fn parse_date(input: &str) -> Result<NaiveDate, GrowthError> {
    let invalid = || GrowthError::InvalidDate(input.to_string());

    let mut parts = input.trim().split('.');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let day = digits(day, 1..=2).ok_or_else(invalid)?;
    let month = digits(month, 1..=2).ok_or_else(invalid)?;
    let year = digits(year, 4..=4).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)
}

fn digits(part: &str, len: RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Monday that opens the bucket `date` is counted in, or `None` when that
/// Monday falls outside chrono's calendar.
///
/// Sundays land in the bucket of the following day, not the week they close.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let offset = 1 - i64::from(date.weekday().num_days_from_sunday());
    date.checked_add_signed(Duration::days(offset))
}

pub fn format_label(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}
