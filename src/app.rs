use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::config::Config;
use crate::picker::{DatePicker, Picker, TimePicker};
use crate::reminder::{clear_reminders, NoticeSlot, PendingSelection, ReminderList};

/// Form controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Message,
    SelectDate,
    SelectTime,
    SetReminder,
    ClearAll,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Message => Focus::SelectDate,
            Focus::SelectDate => Focus::SelectTime,
            Focus::SelectTime => Focus::SetReminder,
            Focus::SetReminder => Focus::ClearAll,
            Focus::ClearAll => Focus::Message,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Message => Focus::ClearAll,
            Focus::SelectDate => Focus::Message,
            Focus::SelectTime => Focus::SelectDate,
            Focus::SetReminder => Focus::SelectTime,
            Focus::ClearAll => Focus::SetReminder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    shown_at: Instant,
}

/// One screen session. Everything here is dropped when the app exits.
pub struct App {
    pub running: bool,
    pub focus: Focus,
    pub reminders: ReminderList,
    pub draft: PendingSelection,
    pub picker: Option<Picker>,
    pub show_help: bool,
    pub list_scroll: usize,
    pub toast: Option<Toast>,
    notices: NoticeSlot,
    toast_duration: Duration,
    reset_draft_after_add: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            running: true,
            focus: Focus::Message,
            reminders: ReminderList::new(),
            draft: PendingSelection::new(),
            picker: None,
            show_help: false,
            list_scroll: 0,
            toast: None,
            notices: NoticeSlot::new(),
            toast_duration: config.toast_duration(),
            reset_draft_after_add: config.reset_draft_after_add,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn input_char(&mut self, c: char) {
        self.draft.push_char(c);
    }

    pub fn backspace(&mut self) {
        self.draft.backspace();
    }

    /// "Set Reminder". Does nothing, silently, unless message, date and time
    /// are all filled in.
    pub fn set_reminder(&mut self) {
        let Some((list, confirmation)) = self.draft.commit(&self.reminders) else {
            debug!(missing = ?self.draft.missing_fields(), "set reminder skipped");
            return;
        };

        self.reminders = list;
        debug!(
            count = self.reminders.len(),
            date = %self.draft.date,
            time = %self.draft.time,
            "reminder added"
        );
        self.post_notice(confirmation);

        if self.reset_draft_after_add {
            self.draft.reset();
        }
    }

    /// "Clear All Reminders". Always succeeds, even on an empty list.
    pub fn clear_all(&mut self) {
        let (list, confirmation) = clear_reminders();
        info!(removed = self.reminders.len(), "reminders cleared");
        self.reminders = list;
        self.post_notice(confirmation);
    }

    pub fn open_date_picker(&mut self, today: NaiveDate) {
        debug!("date picker opened");
        self.picker = Some(Picker::Date(DatePicker::new(today)));
    }

    pub fn open_time_picker(&mut self, now: NaiveTime) {
        debug!("time picker opened");
        self.picker = Some(Picker::Time(TimePicker::new(now)));
    }

    /// Copy the picker's value into the draft and close it.
    pub fn confirm_picker(&mut self) {
        match self.picker.take() {
            Some(Picker::Date(picker)) => {
                debug!(date = %picker.value(), "date selected");
                self.draft.set_date(picker.value());
            }
            Some(Picker::Time(picker)) => {
                debug!(time = %picker.value(), "time selected");
                self.draft.set_time(picker.value());
            }
            None => {}
        }
    }

    /// Close the picker, leaving the draft as it was.
    pub fn cancel_picker(&mut self) {
        if self.picker.take().is_some() {
            debug!("picker dismissed");
        }
    }

    pub fn scroll_up(&mut self) {
        self.list_scroll = self.list_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.list_scroll + 1 < self.reminders.len() {
            self.list_scroll += 1;
        }
    }

    /// Keep the scroll offset on an existing card after the list changed.
    pub fn clamp_scroll(&mut self) {
        self.list_scroll = self
            .list_scroll
            .min(self.reminders.len().saturating_sub(1));
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Move a pending notice into the status bar, or expire the visible one.
    /// Called once per loop iteration, before drawing.
    pub fn sync_toast(&mut self, now: Instant) {
        if let Some(text) = self.notices.take() {
            self.toast = Some(Toast {
                text,
                shown_at: now,
            });
            return;
        }

        let expired = self
            .toast
            .as_ref()
            .is_some_and(|t| now.duration_since(t.shown_at) >= self.toast_duration);
        if expired {
            self.toast = None;
        }
    }

    fn post_notice(&mut self, text: String) {
        if let Some(dropped) = self.notices.post(text) {
            debug!(dropped = %dropped, "undisplayed notice superseded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::Reminder;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn type_message(app: &mut App, text: &str) {
        for c in text.chars() {
            app.input_char(c);
        }
    }

    fn fill_draft(app: &mut App, message: &str, date: (i32, u32, u32), time: (u32, u32)) {
        app.draft.reset();
        type_message(app, message);
        app.open_date_picker(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap());
        app.confirm_picker();
        app.open_time_picker(NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap());
        app.confirm_picker();
    }

    #[test]
    fn buy_milk_scenario() {
        let mut app = app();
        fill_draft(&mut app, "Buy milk", (2024, 1, 15), (9, 0));

        app.set_reminder();
        app.sync_toast(Instant::now());

        assert_eq!(
            &app.reminders[..],
            &[Reminder::new("Buy milk", "2024-01-15", "09:00")]
        );
        assert_eq!(
            app.toast.as_ref().map(|t| t.text.as_str()),
            Some("Reminder set for 2024-01-15 at 09:00")
        );
    }

    #[test]
    fn empty_message_is_a_silent_no_op() {
        let mut app = app();
        fill_draft(&mut app, "", (2024, 1, 15), (9, 0));
        let before = app.reminders.clone();

        app.set_reminder();
        app.sync_toast(Instant::now());

        assert!(app.reminders.same_as(&before));
        assert_eq!(app.toast, None);
    }

    #[test]
    fn two_adds_then_clear() {
        let mut app = app();
        fill_draft(&mut app, "A", (2024, 1, 1), (1, 0));
        app.set_reminder();
        fill_draft(&mut app, "B", (2024, 1, 2), (2, 0));
        app.set_reminder();
        assert_eq!(app.reminders.len(), 2);

        app.clear_all();
        app.sync_toast(Instant::now());

        assert!(app.reminders.is_empty());
        assert_eq!(
            app.toast.as_ref().map(|t| t.text.as_str()),
            Some("All reminders cleared")
        );
    }

    #[test]
    fn latest_notice_replaces_undisplayed_one() {
        let mut app = app();
        fill_draft(&mut app, "A", (2024, 1, 1), (1, 0));
        app.set_reminder();
        app.clear_all();

        app.sync_toast(Instant::now());
        assert_eq!(
            app.toast.as_ref().map(|t| t.text.as_str()),
            Some("All reminders cleared")
        );
    }

    #[test]
    fn toast_expires_after_configured_duration() {
        let config = Config {
            toast_ms: 100,
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.clear_all();

        let start = Instant::now();
        app.sync_toast(start);
        app.sync_toast(start + Duration::from_millis(50));
        assert!(app.toast.is_some());

        app.sync_toast(start + Duration::from_millis(100));
        assert!(app.toast.is_none());
    }

    #[test]
    fn draft_survives_add_by_default() {
        let mut app = app();
        fill_draft(&mut app, "Stretch", (2024, 5, 1), (8, 30));
        app.set_reminder();

        assert_eq!(app.draft.message, "Stretch");
        assert_eq!(app.draft.date, "2024-05-01");
        assert_eq!(app.draft.time, "08:30");

        app.set_reminder();
        assert_eq!(app.reminders.len(), 2);
        assert_eq!(app.reminders[0], app.reminders[1]);
    }

    #[test]
    fn draft_reset_when_configured() {
        let config = Config {
            reset_draft_after_add: true,
            ..Config::default()
        };
        let mut app = App::new(&config);
        fill_draft(&mut app, "Stretch", (2024, 5, 1), (8, 30));
        app.set_reminder();

        assert_eq!(app.reminders.len(), 1);
        assert_eq!(app.draft, PendingSelection::new());
    }

    #[test]
    fn cancelled_picker_keeps_draft() {
        let mut app = app();
        fill_draft(&mut app, "A", (2024, 1, 1), (1, 0));

        app.open_date_picker(NaiveDate::from_ymd_opt(2030, 6, 6).unwrap());
        app.cancel_picker();
        app.open_time_picker(NaiveTime::from_hms_opt(13, 13, 0).unwrap());
        app.cancel_picker();

        assert!(app.picker.is_none());
        assert_eq!(app.draft.date, "2024-01-01");
        assert_eq!(app.draft.time, "01:00");
    }

    #[test]
    fn scroll_stays_within_list() {
        let mut app = app();
        app.scroll_down();
        assert_eq!(app.list_scroll, 0);

        fill_draft(&mut app, "A", (2024, 1, 1), (1, 0));
        app.set_reminder();
        app.set_reminder();
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.list_scroll, 1);

        app.clear_all();
        app.clamp_scroll();
        assert_eq!(app.list_scroll, 0);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = app();
        app.focus_prev();
        assert_eq!(app.focus, Focus::ClearAll);
        app.focus_next();
        assert_eq!(app.focus, Focus::Message);
    }
}
