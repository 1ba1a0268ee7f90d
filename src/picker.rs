//! Modal date and time pickers.
//!
//! Each picker opens on a seed value (the current local date or time) and
//! either yields a formatted value on confirm or nothing on dismiss.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::reminder::model::{format_date, format_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    pub fn next(&self) -> Self {
        match self {
            DateField::Year => DateField::Month,
            DateField::Month => DateField::Day,
            DateField::Day => DateField::Year,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            DateField::Year => DateField::Day,
            DateField::Month => DateField::Year,
            DateField::Day => DateField::Month,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    pub date: NaiveDate,
    pub focus: DateField,
}

impl DatePicker {
    pub fn new(seed: NaiveDate) -> Self {
        Self {
            date: seed,
            focus: DateField::Day,
        }
    }

    pub fn increment(&mut self) {
        self.step(1);
    }

    pub fn decrement(&mut self) {
        self.step(-1);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn value(&self) -> String {
        format_date(self.date)
    }

    fn step(&mut self, delta: i32) {
        let (year, month) = match self.focus {
            DateField::Year => (self.date.year() + delta, self.date.month()),
            DateField::Month => {
                let zero_based = self.date.month0() as i32 + delta;
                (
                    self.date.year() + zero_based.div_euclid(12),
                    zero_based.rem_euclid(12) as u32 + 1,
                )
            }
            DateField::Day => {
                let moved = if delta > 0 {
                    self.date.succ_opt()
                } else {
                    self.date.pred_opt()
                };
                self.date = moved.unwrap_or(self.date);
                return;
            }
        };

        let day = self.date.day().min(days_in_month(year, month));
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            self.date = date;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePicker {
    pub hour: u32,
    pub minute: u32,
    pub focus: TimeField,
    first_digit: Option<u32>,
}

impl TimePicker {
    pub fn new(seed: NaiveTime) -> Self {
        Self {
            hour: seed.hour(),
            minute: seed.minute(),
            focus: TimeField::Hour,
            first_digit: None,
        }
    }

    pub fn increment(&mut self) {
        self.first_digit = None;
        match self.focus {
            TimeField::Hour => self.hour = (self.hour + 1) % 24,
            TimeField::Minute => self.minute = (self.minute + 1) % 60,
        }
    }

    pub fn decrement(&mut self) {
        self.first_digit = None;
        match self.focus {
            TimeField::Hour => self.hour = (self.hour + 23) % 24,
            TimeField::Minute => self.minute = (self.minute + 59) % 60,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.first_digit = None;
        self.focus = match self.focus {
            TimeField::Hour => TimeField::Minute,
            TimeField::Minute => TimeField::Hour,
        };
    }

    /// Type the focused component two digits at a time. A second digit that
    /// would overflow the component starts a new number instead.
    pub fn type_digit(&mut self, digit: u32) {
        let limit = match self.focus {
            TimeField::Hour => 24,
            TimeField::Minute => 60,
        };

        let value = match self.first_digit.take() {
            Some(first) if first * 10 + digit < limit => first * 10 + digit,
            _ => {
                self.first_digit = Some(digit);
                digit
            }
        };

        match self.focus {
            TimeField::Hour => self.hour = value,
            TimeField::Minute => self.minute = value,
        }

        // Both digits entered: hours hand over to minutes.
        if self.first_digit.is_none() && self.focus == TimeField::Hour {
            self.focus = TimeField::Minute;
        }
    }

    pub fn value(&self) -> String {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .map(format_time)
            .unwrap_or_else(|| format!("{:02}:{:02}", self.hour, self.minute))
    }
}

/// Whichever picker dialog is currently open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picker {
    Date(DatePicker),
    Time(TimePicker),
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn date_picker_opens_on_seed() {
        let picker = DatePicker::new(date(2024, 1, 15));
        assert_eq!(picker.value(), "2024-01-15");
        assert_eq!(picker.focus, DateField::Day);
    }

    #[test]
    fn month_step_clamps_day() {
        let mut picker = DatePicker::new(date(2024, 1, 31));
        picker.focus = DateField::Month;
        picker.increment();
        assert_eq!(picker.value(), "2024-02-29");
    }

    #[test]
    fn month_step_wraps_year() {
        let mut picker = DatePicker::new(date(2024, 12, 10));
        picker.focus = DateField::Month;
        picker.increment();
        assert_eq!(picker.value(), "2025-01-10");

        picker.decrement();
        picker.decrement();
        assert_eq!(picker.value(), "2024-11-10");
    }

    #[test]
    fn year_step_clamps_leap_day() {
        let mut picker = DatePicker::new(date(2024, 2, 29));
        picker.focus = DateField::Year;
        picker.increment();
        assert_eq!(picker.value(), "2025-02-28");
    }

    #[test]
    fn day_step_crosses_month() {
        let mut picker = DatePicker::new(date(2024, 3, 31));
        picker.increment();
        assert_eq!(picker.value(), "2024-04-01");
        picker.decrement();
        picker.decrement();
        assert_eq!(picker.value(), "2024-03-30");
    }

    #[test]
    fn date_focus_cycles() {
        let mut picker = DatePicker::new(date(2024, 1, 1));
        picker.focus_next();
        assert_eq!(picker.focus, DateField::Year);
        picker.focus_prev();
        picker.focus_prev();
        assert_eq!(picker.focus, DateField::Month);
    }

    #[test]
    fn time_picker_wraps() {
        let mut picker = TimePicker::new(time(23, 59));
        picker.increment();
        assert_eq!(picker.value(), "00:59");

        picker.toggle_focus();
        picker.increment();
        assert_eq!(picker.value(), "00:00");
        picker.decrement();
        assert_eq!(picker.value(), "00:59");
    }

    #[test]
    fn typed_digits_fill_hour_then_minute() {
        let mut picker = TimePicker::new(time(12, 0));
        for d in [0, 9, 3, 0] {
            picker.type_digit(d);
        }
        assert_eq!(picker.value(), "09:30");
    }

    #[test]
    fn overflowing_second_digit_restarts() {
        let mut picker = TimePicker::new(time(0, 0));
        picker.type_digit(3);
        picker.type_digit(7);
        assert_eq!(picker.hour, 7);
        assert_eq!(picker.focus, TimeField::Hour);
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
