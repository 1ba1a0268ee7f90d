/// Holds at most one confirmation waiting to be shown.
///
/// Posting while a notice is still pending replaces it: only the outcome of
/// the latest add or clear is ever displayed.
#[derive(Debug, Default)]
pub struct NoticeSlot {
    pending: Option<String>,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text`, returning the notice it superseded, if any.
    pub fn post(&mut self, text: String) -> Option<String> {
        self.pending.replace(text)
    }

    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}
