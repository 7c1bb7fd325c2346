//! Transient UI chrome state: nav-bar cart badge and toast notifications.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Non-routing UI state shared by the nav bar and toast overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Item count from the most recently fetched cart; 0 while logged out.
    pub cart_count: u32,
    pub notification: Option<String>,
    toast_seq: u64,
}

impl UiState {
    /// Show a toast and return its token for the auto-dismiss timer.
    pub fn show_toast(&mut self, message: impl Into<String>) -> u64 {
        self.toast_seq = self.toast_seq.wrapping_add(1);
        self.notification = Some(message.into());
        self.toast_seq
    }

    /// Dismiss the toast identified by `token`. A newer toast keeps the
    /// screen; only the timer belonging to the visible toast clears it.
    pub fn dismiss_toast(&mut self, token: u64) {
        if self.toast_seq == token {
            self.notification = None;
        }
    }
}
