use std::ops::Deref;
use std::rc::Rc;

use super::model::Reminder;

pub const CLEARED_CONFIRMATION: &str = "All reminders cleared";

/// The committed reminders of one screen session, in insertion order.
///
/// A list value is never modified after construction. [`add_reminder`] and
/// [`clear_reminders`] hand back a fresh list, so a caller that kept the old
/// value can tell whether anything changed with [`ReminderList::same_as`].
#[derive(Debug, Clone)]
pub struct ReminderList {
    items: Rc<[Reminder]>,
}

impl ReminderList {
    pub fn new() -> Self {
        Self {
            items: Rc::from(Vec::new()),
        }
    }

    /// True when both values are the very same list, not merely equal ones.
    pub fn same_as(&self, other: &ReminderList) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl Default for ReminderList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ReminderList {
    type Target = [Reminder];

    fn deref(&self) -> &[Reminder] {
        &self.items
    }
}

impl PartialEq for ReminderList {
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl Eq for ReminderList {}

impl FromIterator<Reminder> for ReminderList {
    fn from_iter<I: IntoIterator<Item = Reminder>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Append one reminder to the end of `list`.
///
/// Performs no validation; callers guard against empty fields before calling
/// (see [`super::PendingSelection::commit`]).
pub fn add_reminder(
    list: &ReminderList,
    message: &str,
    date: &str,
    time: &str,
) -> (ReminderList, String) {
    let appended = list
        .iter()
        .cloned()
        .chain(std::iter::once(Reminder::new(message, date, time)))
        .collect();
    (appended, format!("Reminder set for {} at {}", date, time))
}

pub fn clear_reminders() -> (ReminderList, String) {
    (ReminderList::new(), CLEARED_CONFIRMATION.to_string())
}
