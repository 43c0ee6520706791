//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the poem workspace and read/write shared state from the
//! `PoemSignals` context.

pub mod notice_banner;
pub mod poem_card;
pub mod poem_list;
pub mod poem_panel;
pub mod toolbar;
