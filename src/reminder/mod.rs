pub mod draft;
pub mod model;
pub mod notice;
pub mod store;

pub use draft::PendingSelection;
pub use model::Reminder;
pub use notice::NoticeSlot;
pub use store::{add_reminder, clear_reminders, ReminderList};
