//! Typed remote poem store.
//!
//! DESIGN
//! ======
//! The trait is `?Send` because browser futures (`gloo-net`) are not `Send`;
//! every driver in this crate runs on a single-threaded executor anyway.
//! Implementations are stateless request/response mappings and never touch
//! view state; reconciliation belongs to the callers.

use async_trait::async_trait;

use crate::error::RemoteError;

/// Remote poem generation and storage operations.
#[async_trait(?Send)]
pub trait PoemStore {
    /// Ask the store to generate `line_count` lines. The store keeps the
    /// result as its current draft.
    async fn generate(&self, line_count: u32) -> Result<Vec<String>, RemoteError>;

    /// Persist the store's current draft under `title`.
    async fn save(&self, title: &str) -> Result<(), RemoteError>;

    /// Titles of all saved poems, in store order.
    async fn list_titles(&self) -> Result<Vec<String>, RemoteError>;

    /// Lines of the poem saved under `title`.
    async fn fetch_poem(&self, title: &str) -> Result<Vec<String>, RemoteError>;

    /// Delete the poem saved under `title`. Unknown titles are an error.
    async fn delete_poem(&self, title: &str) -> Result<(), RemoteError>;

    /// Store `raw_content` as a new poem under `title`.
    async fn import_poem(&self, title: &str, raw_content: &str) -> Result<(), RemoteError>;
}
