use chrono::{Local, NaiveDate};

/// Format used for day keys in the record and history
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Today's local date as a day key ("YYYY-MM-DD").
///
/// This is the only place the app asks the wall clock what day it is;
/// reconciliation only ever compares the resulting strings.
pub fn today_key() -> String {
    day_key(Local::now().date_naive())
}

/// Format a date as a day key
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parse a day key back into a date
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}

/// Long form for display, e.g. "October 16, 2026". Falls back to the raw key.
pub fn long_date(key: &str) -> String {
    match parse_day_key(key) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => key.to_string(),
    }
}
