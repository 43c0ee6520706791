//! Error taxonomy for the client core.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are detected locally and never reach the network.
//! Remote failures carry the store's own message when it sent one. Superseded
//! results are not errors at all; they surface as outcome variants in
//! `list_sync` and `workflow`.

/// Shown whenever the store did not provide a message of its own.
pub const CONNECTIVITY_MESSAGE: &str = "could not reach the poem service, check your network connection";

/// A local check failed before any remote call was made.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("line count must be a positive whole number, got `{0}`")]
    InvalidLineCount(String),
    #[error("line count `{0}` is too large, the most is {max}", max = u32::MAX)]
    LineCountTooLarge(String),
    #[error("please enter a poem title")]
    EmptyTitle,
    #[error("please choose a plain text (.txt) file, got `{0}`")]
    NotTextFile(String),
    #[error("the file has no content")]
    EmptyContent,
    #[error("generate a poem before saving")]
    NoDraft,
}

/// A remote call failed in transport or was rejected by the store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("poem service returned HTTP {0}")]
    Status(u16),
    #[error("malformed response from poem service: {0}")]
    Decode(String),
    #[error("poem service rejected the request: {message}")]
    Rejected { message: String },
    #[error("poem `{title}` not found: {message}")]
    NotFound { title: String, message: String },
}

impl RemoteError {
    /// Text suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message } | Self::NotFound { message, .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => CONNECTIVITY_MESSAGE.to_owned(),
        }
    }
}

/// Failure of a user-triggered flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoemError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl PoemError {
    /// Text suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Remote(err) => err.user_message(),
        }
    }
}

/// The durable preference store could not be read or written.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
