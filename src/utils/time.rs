use chrono::{NaiveDate, NaiveTime};

/// e.g. `Sunday, June 14, 2026`
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// e.g. `6:30 PM`
pub fn format_event_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
