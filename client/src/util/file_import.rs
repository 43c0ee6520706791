//! Reading a picked file into an [`ImportFile`].
//!
//! A file the browser fails to read never reaches the import flow; it is
//! reported on the notice banner as an [`UnreadableFile`].

#[cfg(test)]
#[path = "file_import_test.rs"]
mod file_import_test;

use leptos::prelude::*;
use poems::{Interaction, Notice};

use crate::state::ui::UiState;
use crate::util::interaction::BrowserInteraction;

/// The browser could not produce the text of a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnreadableFile {
    pub name: String,
    pub reason: String,
}

impl UnreadableFile {
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::Error(format!("could not read \"{}\": {}", self.name, self.reason))
    }
}

/// Put the read failure on the banner.
pub fn report_unreadable(ui: RwSignal<UiState>, err: &UnreadableFile) {
    BrowserInteraction::new(ui).notify(err.notice());
}

/// Read the first selected file. `Ok(None)` when nothing was picked.
///
/// # Errors
///
/// Returns [`UnreadableFile`] when the browser rejects the read.
#[cfg(feature = "csr")]
pub async fn read_selected(input: &web_sys::HtmlInputElement) -> Result<Option<poems::ImportFile>, UnreadableFile> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    match wasm_bindgen_futures::JsFuture::from(file.text()).await {
        Ok(text) => Ok(Some(poems::ImportFile {
            name: file.name(),
            content_type: file.type_(),
            content: text.as_string().unwrap_or_default(),
        })),
        Err(err) => {
            log::warn!("could not read `{}`: {err:?}", file.name());
            let reason = err.as_string().unwrap_or_else(|| "the browser refused to read it".to_owned());
            Err(UnreadableFile { name: file.name(), reason })
        }
    }
}
