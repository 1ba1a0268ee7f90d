use super::store::{add_reminder, ReminderList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Empty,
    Set,
}

impl FieldState {
    fn of(value: &str) -> Self {
        if value.is_empty() {
            FieldState::Empty
        } else {
            FieldState::Set
        }
    }
}

/// The not-yet-committed draft for the next reminder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingSelection {
    pub message: String,
    pub date: String,
    pub time: String,
}

impl PendingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_state(&self) -> FieldState {
        FieldState::of(&self.message)
    }

    pub fn date_state(&self) -> FieldState {
        FieldState::of(&self.date)
    }

    pub fn time_state(&self) -> FieldState {
        FieldState::of(&self.time)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("message", self.message_state()),
            ("date", self.date_state()),
            ("time", self.time_state()),
        ]
        .into_iter()
        .filter(|(_, state)| *state == FieldState::Empty)
        .map(|(name, _)| name)
        .collect()
    }

    pub fn push_char(&mut self, c: char) {
        self.message.push(c);
    }

    pub fn backspace(&mut self) {
        self.message.pop();
    }

    pub fn set_date(&mut self, date: String) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: String) {
        self.time = time;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add the draft to `list`, or do nothing when any field is empty.
    ///
    /// An incomplete draft is a silent no-op: `None`, no confirmation. The
    /// draft itself is left as it is either way.
    pub fn commit(&self, list: &ReminderList) -> Option<(ReminderList, String)> {
        if !self.is_complete() {
            return None;
        }
        Some(add_reminder(list, &self.message, &self.date, &self.time))
    }
}
