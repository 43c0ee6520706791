//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Poem state lives in the core crate's plain structs (`WorkflowState`,
//! `PoemListState`) held in `RwSignal`s. The async flows reach those signals
//! through [`SignalCell`], so the same controller code drives the browser UI
//! and the native tests.

pub mod ui;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::rc::Rc;

use leptos::prelude::*;
use poems::{PoemListState, PoemWorkflowController, StateCell, WorkflowState};

use crate::config::ApiConfig;
use crate::net::api::HttpPoemStore;
use crate::util::interaction::BrowserInteraction;
use ui::UiState;

/// `StateCell` over a Leptos signal. Writes notify subscribers; reads are
/// untracked since drivers run outside any reactive scope.
#[derive(Debug)]
pub struct SignalCell<T: 'static>(pub RwSignal<T>);

impl<T: 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalCell<T> {}

impl<T: Send + Sync + 'static> StateCell<T> for SignalCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}

/// Workflow controller as wired in the browser.
pub type BrowserWorkflow =
    PoemWorkflowController<HttpPoemStore, SignalCell<WorkflowState>, SignalCell<PoemListState>, BrowserInteraction>;

/// Signals for the poem page, provided as one context value.
#[derive(Clone, Copy, Debug)]
pub struct PoemSignals {
    pub workflow: RwSignal<WorkflowState>,
    pub list: RwSignal<PoemListState>,
    pub ui: RwSignal<UiState>,
    pub config: ApiConfig,
}

impl PoemSignals {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            workflow: RwSignal::new(WorkflowState::default()),
            list: RwSignal::new(PoemListState::default()),
            ui: RwSignal::new(UiState::default()),
            config,
        }
    }

    /// Build a controller over these signals.
    ///
    /// Controllers are cheap and hold no state of their own; reload ordering
    /// is tracked inside `PoemListState`, so controllers built for different
    /// clicks still agree on which reload is newest.
    pub fn controller(self) -> BrowserWorkflow {
        PoemWorkflowController::new(
            Rc::new(HttpPoemStore::new(self.config)),
            SignalCell(self.workflow),
            SignalCell(self.list),
            BrowserInteraction::new(self.ui),
        )
    }

    /// Run `flow` on a fresh controller in the background. Off-browser this
    /// does nothing.
    pub fn spawn<F, Fut>(self, flow: F)
    where
        F: FnOnce(BrowserWorkflow) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        #[cfg(feature = "csr")]
        {
            let controller = self.controller();
            leptos::task::spawn_local(flow(controller));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = flow;
        }
    }
}
