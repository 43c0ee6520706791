//! Browser plumbing for the appearance preference.
//!
//! `LocalStoragePreference` persists the preference under `poet_theme`.
//! `BrowserColorScheme` reads `prefers-color-scheme` and applies a
//! `data-theme` attribute to the `<html>` element. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Off-browser builds have no storage and no media queries: storage reports
//! `Unavailable`, so the preference controller runs memory-only, and the
//! environment always reads as light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use poems::{AppearanceEnvironment, PreferenceController, PreferenceStore, ResolvedAppearance, StorageError};

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "poet_theme";
#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Preference controller as wired in the browser.
pub type BrowserPreference = PreferenceController<LocalStoragePreference, BrowserColorScheme>;

/// Preference persistence in `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreference;

impl PreferenceStore for LocalStoragePreference {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(STORAGE_KEY)
                .map_err(|_| StorageError::Unavailable("localStorage read was refused".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable("no browser storage".to_owned()))
        }
    }

    fn store(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, value)
                .map_err(|_| StorageError::Unavailable("localStorage write was refused".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
            Err(StorageError::Unavailable("no browser storage".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable("localStorage access denied".to_owned()))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

/// The `prefers-color-scheme` media query and the document root.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserColorScheme;

impl AppearanceEnvironment for BrowserColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            color_scheme_query().is_some_and(|mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    fn apply(&self, appearance: ResolvedAppearance) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
                let _ = el.set_attribute("data-theme", appearance.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = appearance;
        }
    }
}

#[cfg(feature = "csr")]
fn color_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// Call `callback` whenever the environment's color scheme flips.
///
/// The listener lives as long as the page.
pub fn on_color_scheme_change(callback: impl Fn() + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(query) = color_scheme_query() else {
            log::warn!("prefers-color-scheme is not supported; theme will not follow the system");
            return;
        };
        let listener = Closure::<dyn Fn()>::new(callback);
        if query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()).is_err() {
            log::warn!("could not subscribe to color scheme changes");
        }
        listener.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = callback;
    }
}
