//! Reverse mapping of spreadsheet date serials back to the text they replaced
//!
//! Spreadsheet imports turned fractions such as `3/8` into dates and then into
//! day serials such as `45724`. Serials inside the corruption window are
//! converted back to `month/day`.

use crate::io::configuration::{SERIAL_WINDOW_END, SERIAL_WINDOW_START};
use chrono::{Datelike, Days, NaiveDate};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Five-digit tokens starting 456..459, the serials of the corrupted year
static SERIAL_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(45[6-9][0-9]{2})\b").ok());

/// Day zero of the serial scheme used by the corrupted exports
pub fn serial_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 31)
}

/// Whether `serial` lies in the corruption window
pub const fn in_window(serial: u32) -> bool {
    serial >= SERIAL_WINDOW_START && serial <= SERIAL_WINDOW_END
}

/// Calendar date of a serial inside the corruption window
pub fn serial_to_date(serial: u32) -> Option<NaiveDate> {
    if !in_window(serial) {
        return None;
    }
    serial_epoch()?.checked_add_days(Days::new(u64::from(serial)))
}

/// The `month/day` text a serial was decoded from
pub fn serial_to_fraction(serial: u32) -> Option<String> {
    serial_to_date(serial).map(|d| format!("{}/{}", d.month(), d.day()))
}

/// Month number encoded by a serial, used for grade levels
pub fn serial_to_month(serial: u32) -> Option<u32> {
    serial_to_date(serial).map(|d| d.month())
}

/// Replace every corrupted serial token in `text` with its fraction
pub fn clean_text(text: &str) -> String {
    let Some(pattern) = SERIAL_TOKEN.as_ref() else {
        return text.to_string();
    };
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            caps.get(1)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .and_then(serial_to_fraction)
                .unwrap_or_else(|| {
                    caps.get(0)
                        .map_or_else(String::new, |m| m.as_str().to_string())
                })
        })
        .into_owned()
}
