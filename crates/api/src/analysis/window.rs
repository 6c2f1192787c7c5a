use time::{macros::format_description, Date, Duration};

use crate::db::Error;

/// Length of the trailing window served by the precipitation and tobs routes.
/// Always 365 days, leap years included.
pub const WINDOW_DAYS: i64 = 365;

fn parse_iso(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

/// Exactly four year digits, two month digits and two day digits. `[year]`
/// alone also accepts a leading sign, which would break string comparison
/// against stored dates.
fn is_iso_shaped(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a caller supplied `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<Date, Error> {
    if !is_iso_shaped(value) {
        return Err(Error::InvalidDateFormat {
            value: value.to_owned(),
            source: None,
        });
    }
    parse_iso(value).map_err(|source| Error::InvalidDateFormat {
        value: value.to_owned(),
        source: Some(source),
    })
}

pub fn format_date(date: Date) -> Result<String, Error> {
    Ok(date.format(format_description!("[year]-[month]-[day]"))?)
}

/// First date of the window ending at `max_date`, i.e. `max_date - 365 days`.
pub fn one_year_before(max_date: &str) -> Result<String, Error> {
    let latest = parse_iso(max_date).map_err(|source| Error::InvalidStoredDate {
        value: max_date.to_owned(),
        source,
    })?;
    format_date(latest.saturating_sub(Duration::days(WINDOW_DAYS)))
}
