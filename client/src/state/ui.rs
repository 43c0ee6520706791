//! Local UI chrome state (notice banner, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the poem state so the banner
//! and toggle can change without touching the workflow signals.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use poems::{Notice, ResolvedAppearance};

/// UI state for the notice banner and the applied theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Last message for the user; cleared when dismissed.
    pub notice: Option<Notice>,
    pub appearance: ResolvedAppearance,
}

impl UiState {
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Glyph for the theme toggle: the sun while dark, the moon while light.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.appearance.is_dark() { "☀" } else { "☾" }
    }
}
