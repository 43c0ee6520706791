//! Browser-side interactive collaborators for the poem flows.
//!
//! Confirmation and title prompts use the native `window.confirm` and
//! `window.prompt` dialogs. Notices go to the page banner through `UiState`.
//! Off-browser, confirmation is declined and prompts are cancelled, so no
//! destructive flow can proceed without a user.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use leptos::prelude::*;
use poems::{Interaction, Notice};

use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug)]
pub struct BrowserInteraction {
    ui: RwSignal<UiState>,
}

impl BrowserInteraction {
    pub fn new(ui: RwSignal<UiState>) -> Self {
        Self { ui }
    }
}

impl Interaction for BrowserInteraction {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            false
        }
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            web_sys::window()?.prompt_with_message_and_default(message, default).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (message, default);
            None
        }
    }

    fn notify(&self, notice: Notice) {
        self.ui.update(|u| u.notice = Some(notice));
    }
}
