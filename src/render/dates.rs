//! Date formatting with chrono.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Top-bar date, e.g. `Tue, Jan 14, 2025`.
pub fn topbar_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Short date of a contact message, e.g. `1/14/2025`. The backend sends
/// RFC 2822; RFC 3339 and plain SQL timestamps are accepted too. Anything
/// else is shown as received.
pub fn message_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc2822(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topbar_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
        assert_eq!(topbar_date(date), "Tue, Jan 14, 2025");
    }

    #[test]
    fn test_message_date_formats() {
        assert_eq!(message_date("Tue, 14 Jan 2025 10:30:00 GMT"), "1/14/2025");
        assert_eq!(message_date("2025-03-02T08:00:00+00:00"), "3/2/2025");
        assert_eq!(message_date("2025-11-30 23:59:59"), "11/30/2025");
        assert_eq!(message_date("2025-11-30"), "11/30/2025");
        assert_eq!(message_date("yesterday"), "yesterday");
    }
}
