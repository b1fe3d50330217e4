use chrono::{Datelike, NaiveDate};

use crate::store::DateRange;
use crate::{ClientError, ClientResult};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_period(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Short day-month label used for daily buckets, e.g. `07-03`.
pub fn day_label(date: &NaiveDate) -> String {
    date.format("%d-%m").to_string()
}

pub fn month_label(month: u32) -> &'static str {
    let index = usize::try_from(month.saturating_sub(1)).unwrap_or(0);
    MONTH_LABELS.get(index).copied().unwrap_or("???")
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !looks_like_iso_date(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn parse_iso_date_strict(value: &str, field_name: &str, command: &str) -> ClientResult<NaiveDate> {
    parse_iso_date(value.trim())
        .ok_or_else(|| ClientError::invalid_date(field_name, value, command))
}

/// Parses `YYYY-MM` into (year, month).
pub fn parse_period(value: &str, command: &str) -> ClientResult<(i32, u32)> {
    let trimmed = value.trim();
    let invalid = || {
        ClientError::invalid_argument_for_command(
            &format!("`period` must use YYYY-MM format, received `{value}`."),
            Some(command),
        )
    };

    let bytes = trimmed.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return Err(invalid());
    }
    for index in [0usize, 1, 2, 3, 5, 6] {
        if !bytes[index].is_ascii_digit() {
            return Err(invalid());
        }
    }

    let year = trimmed[..4].parse::<i32>().map_err(|_| invalid())?;
    let month = trimmed[5..].parse::<u32>().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_range(year: i32, month: u32) -> Option<DateRange> {
    let from = NaiveDate::from_ymd_opt(year, month, 1)?;
    let to = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    Some(DateRange { from, to })
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
