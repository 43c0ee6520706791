//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the core flows stay testable off-browser.

pub mod dark_mode;
pub mod file_import;
pub mod interaction;
