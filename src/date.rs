use chrono::{Datelike, Duration, Local, NaiveDate, ParseError};

/// Format a date as `YYYY-MM-DD`.
pub fn format_local_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Strict `YYYY-MM-DD` parse. Called once at the API boundary; the engine
/// itself only ever sees `NaiveDate` values.
pub fn parse_local_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
}

pub fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    date + Duration::days(delta)
}

/// Day of week as 0=Sunday..6=Saturday, matching `days_of_week` storage.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// The current calendar day in the server's local timezone. Day boundaries
/// follow the local clock, not UTC.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_string() -> String {
    format_local_date(local_today())
}
