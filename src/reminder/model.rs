use chrono::{NaiveDate, NaiveTime};

/// `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `HH:MM`, 24-hour clock.
pub const TIME_FORMAT: &str = "%H:%M";

/// A committed note-to-self. Reminders carry no identity of their own: two
/// reminders with the same message, date and time are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reminder {
    pub message: String,
    pub date: String,
    pub time: String,
}

impl Reminder {
    pub fn new(
        message: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
