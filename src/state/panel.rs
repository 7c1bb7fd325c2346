//! Per-panel load lifecycle.
//!
//! DESIGN
//! ======
//! Every view activation re-fetches its panel content from scratch; there is
//! no incremental patching and no retry. All three failure classes
//! (transport, non-success status, malformed body) collapse into a
//! panel-local message here, so a broken loader can never break navigation.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::net::api::ApiError;

/// Content lifecycle for one view's panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PanelState<T> {
    /// Fold an API result into displayable panel content.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => PanelState::Ready(value),
            Err(err) => PanelState::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        PanelState::Loading
    }
}
