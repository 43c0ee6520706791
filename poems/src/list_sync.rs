//! Saved-poem list with lazily resolved previews.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reloads and preview fetches overlap freely: a mutation can trigger a reload
//! while an older reload is still in flight, and every listed title spawns its
//! own preview fetch. [`PoemListState`] is the synchronous state machine that
//! decides which completions still apply; [`PoemListSynchronizer`] drives it
//! against a [`PoemStore`].
//!
//! ORDERING
//! ========
//! Each reload takes the next sequence number. A reload result is applied only
//! if its number is still the latest issued when it completes, so results land
//! in "last issued, last applied" order regardless of network latency.
//! Preview tickets carry the sequence number of the reload that rendered their
//! row; once a newer reload renders, older preview results are dropped, which
//! also keeps deleted titles from coming back.

#[cfg(test)]
#[path = "list_sync_test.rs"]
mod list_sync_test;

use std::collections::HashMap;
use std::rc::Rc;

use futures::future::join_all;

use crate::cell::StateCell;
use crate::error::RemoteError;
use crate::remote::PoemStore;

/// Number of leading lines shown as a preview.
pub const PREVIEW_LINES: usize = 2;
/// Preview text for a poem with no lines.
pub const NO_CONTENT_PREVIEW: &str = "no content";
/// Preview text when the poem could not be fetched.
pub const FAILED_PREVIEW: &str = "failed to load";
/// Preview text while the fetch is in flight.
pub const PENDING_PREVIEW: &str = "loading…";

/// Preview of one listed poem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewState {
    Pending,
    Resolved(String),
    Failed,
}

impl PreviewState {
    /// Text to render for this preview.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Pending => PENDING_PREVIEW,
            Self::Resolved(text) => text,
            Self::Failed => FAILED_PREVIEW,
        }
    }
}

/// One row of the saved-poem list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoemSummary {
    pub title: String,
    pub preview: PreviewState,
}

/// Preview text for a fetched poem.
#[must_use]
pub fn preview_text(lines: &[String]) -> String {
    if lines.is_empty() {
        return NO_CONTENT_PREVIEW.to_owned();
    }
    lines.iter().take(PREVIEW_LINES).map(String::as_str).collect::<Vec<_>>().join("\n")
}

/// Identifies one issued reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadTicket(u64);

/// Identifies one preview fetch for a rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTicket {
    title: String,
    generation: u64,
}

impl PreviewTicket {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Result of completing a reload.
#[derive(Debug, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// Titles rendered; the previews still need resolving.
    Applied(Vec<PreviewTicket>),
    /// A later reload was issued meanwhile; nothing changed.
    Stale,
    /// The latest reload failed; the previous list stays visible.
    Failed(RemoteError),
}

/// Displayed poem list.
#[derive(Clone, Debug, Default)]
pub struct PoemListState {
    titles: Vec<String>,
    previews: HashMap<String, PreviewState>,
    issued: u64,
    rendered: u64,
    loading: bool,
    error: Option<String>,
}

impl PoemListState {
    /// Issue the next reload.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.issued += 1;
        self.loading = true;
        log::debug!("poem list reload #{} issued", self.issued);
        ReloadTicket(self.issued)
    }

    /// Apply or discard the outcome of the reload identified by `ticket`.
    pub fn finish_reload(&mut self, ticket: ReloadTicket, result: Result<Vec<String>, RemoteError>) -> ReloadOutcome {
        if ticket.0 != self.issued {
            log::debug!("discarding reload #{} superseded by #{}", ticket.0, self.issued);
            return ReloadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(titles) => {
                self.rendered = ticket.0;
                self.error = None;
                self.previews = titles.iter().map(|title| (title.clone(), PreviewState::Pending)).collect();
                self.titles = titles;
                let tickets = self
                    .titles
                    .iter()
                    .map(|title| PreviewTicket { title: title.clone(), generation: ticket.0 })
                    .collect();
                ReloadOutcome::Applied(tickets)
            }
            Err(err) => {
                log::warn!("poem list reload failed: {err}");
                self.error = Some(err.user_message());
                ReloadOutcome::Failed(err)
            }
        }
    }

    /// Apply a preview fetch result. Returns `false` when the row it was
    /// fetched for is no longer rendered.
    pub fn finish_preview(&mut self, ticket: PreviewTicket, result: Result<Vec<String>, RemoteError>) -> bool {
        if ticket.generation != self.rendered {
            log::debug!("discarding preview of `{}` from reload #{}", ticket.title, ticket.generation);
            return false;
        }
        let Some(preview) = self.previews.get_mut(&ticket.title) else {
            return false;
        };
        *preview = match result {
            Ok(lines) => PreviewState::Resolved(preview_text(&lines)),
            Err(err) => {
                log::warn!("preview of `{}` failed: {err}", ticket.title);
                PreviewState::Failed
            }
        };
        true
    }

    /// Rendered titles in store order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    #[must_use]
    pub fn preview(&self, title: &str) -> Option<&PreviewState> {
        self.previews.get(title)
    }

    /// Rendered rows in store order.
    #[must_use]
    pub fn summaries(&self) -> Vec<PoemSummary> {
        self.titles
            .iter()
            .map(|title| PoemSummary {
                title: title.clone(),
                preview: self.previews.get(title).cloned().unwrap_or(PreviewState::Pending),
            })
            .collect()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing message of the latest failed reload, cleared on success.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Drives [`PoemListState`] against a remote store.
pub struct PoemListSynchronizer<S: ?Sized, C> {
    store: Rc<S>,
    state: C,
}

impl<S: ?Sized, C: Clone> Clone for PoemListSynchronizer<S, C> {
    fn clone(&self) -> Self {
        Self { store: Rc::clone(&self.store), state: self.state.clone() }
    }
}

impl<S, C> PoemListSynchronizer<S, C>
where
    S: PoemStore + ?Sized,
    C: StateCell<PoemListState>,
{
    pub fn new(store: Rc<S>, state: C) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Reload the titles, then resolve every rendered preview concurrently.
    ///
    /// Superseded reloads finish quietly with `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns the remote error when this is still the latest reload and it
    /// failed; the previously displayed list is left untouched.
    pub async fn reload(&self) -> Result<(), RemoteError> {
        let Some(ticket) = self.state.update_with(PoemListState::begin_reload) else {
            return Ok(());
        };
        let result = self.store.list_titles().await;
        match self.state.update_with(|state| state.finish_reload(ticket, result)) {
            Some(ReloadOutcome::Applied(previews)) => {
                join_all(previews.into_iter().map(|preview| self.resolve_preview(preview))).await;
                Ok(())
            }
            Some(ReloadOutcome::Failed(err)) => Err(err),
            Some(ReloadOutcome::Stale) | None => Ok(()),
        }
    }

    /// Fetch one poem and apply its preview if its row is still rendered.
    pub async fn resolve_preview(&self, ticket: PreviewTicket) -> bool {
        let result = self.store.fetch_poem(ticket.title()).await;
        self.state.update_with(|state| state.finish_preview(ticket, result)).unwrap_or(false)
    }
}
