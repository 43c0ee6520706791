//! Client-side state synchronization for the poem generation and storage
//! service.
//!
//! This crate owns everything with ordering or consistency concerns: the
//! typed remote contract, the import parser, the appearance-preference state
//! machine, the poem-list synchronizer and the user-facing workflows. It has
//! no browser or network code; `poet-web` and `poet-cli` plug in transports
//! and interactive collaborators through the traits defined here.
//!
//! SYSTEM CONTEXT
//! ==============
//! All drivers assume a single-threaded cooperative scheduler. Shared state is
//! reached through [`cell::StateCell`], and no borrow is held across an
//! `.await`, so interleaved completions only ever observe whole updates.

pub mod cell;
pub mod error;
pub mod import;
pub mod list_sync;
pub mod preference;
pub mod protocol;
pub mod remote;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_support;

pub use cell::StateCell;
pub use error::{PoemError, RemoteError, StorageError, ValidationError};
pub use list_sync::{PoemListState, PoemListSynchronizer, PoemSummary, PreviewState};
pub use preference::{AppearanceEnvironment, AppearancePreference, PreferenceController, PreferenceStore, ResolvedAppearance};
pub use remote::PoemStore;
pub use workflow::{ImportFile, Interaction, Notice, PoemDisplay, PoemWorkflowController, WorkflowState};
