//! User-triggered poem flows: generate, save, delete, import and view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each public flow is the top of its own failure boundary. Failures are
//! rendered into [`WorkflowState`] or reported through [`Interaction::notify`]
//! before the flow returns, and the returned `Result` is informational only.
//! Nothing is retried; a retry is a new user action.
//!
//! Every successful save, delete or import triggers exactly one list reload.
//! Overlapping reloads are reconciled by [`PoemListSynchronizer`], so no
//! coalescing happens here.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use std::num::IntErrorKind;
use std::rc::Rc;

use crate::cell::StateCell;
use crate::error::{PoemError, ValidationError};
use crate::import;
use crate::list_sync::{PoemListState, PoemListSynchronizer};
use crate::remote::PoemStore;

/// Line count offered before the user types anything.
pub const DEFAULT_LINE_INPUT: &str = "4";

/// A message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Info(message) | Self::Error(message) => message,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Interactive collaborators the flows depend on.
pub trait Interaction {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> bool;
    /// Ask for text; `None` when the user cancels.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
    /// Show a message.
    fn notify(&self, notice: Notice);
}

/// A file picked for import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportFile {
    pub name: String,
    pub content_type: String,
    pub content: String,
}

/// Whether a flow ran to completion or the user backed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Done,
    Cancelled,
}

/// Contents of the poem display area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PoemDisplay {
    #[default]
    Empty,
    /// A generation is in flight.
    Pending,
    /// A generated draft (`title: None`) or a saved poem.
    Poem { title: Option<String>, lines: Vec<String> },
    Failed(String),
}

/// Form inputs, the displayed poem and the current draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowState {
    pub line_input: String,
    pub title_input: String,
    pub display: PoemDisplay,
    draft: Option<Vec<String>>,
    issued: u64,
    shown: u64,
    latest_generate: u64,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            line_input: DEFAULT_LINE_INPUT.to_owned(),
            title_input: String::new(),
            display: PoemDisplay::Empty,
            draft: None,
            issued: 0,
            shown: 0,
            latest_generate: 0,
        }
    }
}

impl WorkflowState {
    /// Whether the save action is offered.
    #[must_use]
    pub fn save_available(&self) -> bool {
        self.draft.is_some()
    }

    /// Lines of the unsaved generated poem, if any.
    #[must_use]
    pub fn draft(&self) -> Option<&[String]> {
        self.draft.as_deref()
    }

    fn begin_generate(&mut self) -> u64 {
        self.issued += 1;
        self.latest_generate = self.issued;
        self.display = PoemDisplay::Pending;
        self.issued
    }

    fn begin_view(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Show `display` unless something issued later is already shown.
    fn show(&mut self, seq: u64, display: PoemDisplay) -> bool {
        if seq <= self.shown {
            log::debug!("discarding display #{seq}, #{} already shown", self.shown);
            return false;
        }
        self.shown = seq;
        self.display = display;
        true
    }
}

/// Parse the line-count input.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLineCount`] unless the trimmed input is
/// a positive whole number, and [`ValidationError::LineCountTooLarge`] when
/// it is one but does not fit a `u32`.
pub fn parse_line_count(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
            Err(ValidationError::LineCountTooLarge(trimmed.to_owned()))
        }
        _ => Err(ValidationError::InvalidLineCount(trimmed.to_owned())),
    }
}

/// Orchestrates the poem flows on top of the store and the list synchronizer.
pub struct PoemWorkflowController<S: ?Sized, W, L, I> {
    store: Rc<S>,
    state: W,
    list: PoemListSynchronizer<S, L>,
    interaction: I,
}

impl<S: ?Sized, W: Clone, L: Clone, I: Clone> Clone for PoemWorkflowController<S, W, L, I> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            state: self.state.clone(),
            list: self.list.clone(),
            interaction: self.interaction.clone(),
        }
    }
}

impl<S, W, L, I> PoemWorkflowController<S, W, L, I>
where
    S: PoemStore + ?Sized,
    W: StateCell<WorkflowState>,
    L: StateCell<PoemListState>,
    I: Interaction,
{
    pub fn new(store: Rc<S>, state: W, list_state: L, interaction: I) -> Self {
        let list = PoemListSynchronizer::new(Rc::clone(&store), list_state);
        Self { store, state, list, interaction }
    }

    pub fn state(&self) -> &W {
        &self.state
    }

    pub fn list(&self) -> &PoemListSynchronizer<S, L> {
        &self.list
    }

    /// Initial load of the saved-poem list.
    pub async fn start(&self) {
        self.refresh_list().await;
    }

    /// Generate a poem with the line count currently in the input.
    ///
    /// # Errors
    ///
    /// Returns the validation or remote failure after it has been shown.
    pub async fn generate(&self) -> Result<(), PoemError> {
        let result = self.try_generate().await;
        if let Err(err @ PoemError::Validation(_)) = &result {
            self.report(err);
        }
        result
    }

    async fn try_generate(&self) -> Result<(), PoemError> {
        let input = self.state.read_with(|s| s.line_input.clone()).unwrap_or_default();
        let line_count = parse_line_count(&input)?;
        let Some(seq) = self.state.update_with(WorkflowState::begin_generate) else {
            return Ok(());
        };
        let result = self.store.generate(line_count).await;
        let applied = self.state.update_with(|s| {
            let latest = seq == s.latest_generate;
            match result {
                Ok(lines) => {
                    if latest {
                        s.draft = Some(lines.clone());
                    }
                    s.show(seq, PoemDisplay::Poem { title: None, lines });
                    Ok(())
                }
                Err(err) => {
                    log::warn!("poem generation failed: {err}");
                    if latest {
                        s.draft = None;
                    }
                    s.show(seq, PoemDisplay::Failed(err.user_message()));
                    Err(err)
                }
            }
        });
        applied.unwrap_or(Ok(())).map_err(PoemError::from)
    }

    /// Save the current draft under the title currently in the input.
    ///
    /// # Errors
    ///
    /// Returns the validation or remote failure after it has been reported.
    pub async fn save(&self) -> Result<(), PoemError> {
        let result = self.try_save().await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    async fn try_save(&self) -> Result<(), PoemError> {
        let (title, has_draft) = self
            .state
            .read_with(|s| (s.title_input.trim().to_owned(), s.save_available()))
            .unwrap_or_default();
        if !has_draft {
            return Err(ValidationError::NoDraft.into());
        }
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        self.store.save(&title).await?;
        log::info!("saved poem `{title}`");
        self.state.update_with(|s| {
            // A title typed while the save was in flight is kept.
            if s.title_input.trim() == title {
                s.title_input.clear();
            }
            s.draft = None;
        });
        self.interaction.notify(Notice::Info(format!("Saved \"{title}\".")));
        self.refresh_list().await;
        Ok(())
    }

    /// Delete `title` after the user confirms.
    ///
    /// # Errors
    ///
    /// Returns the remote failure after it has been reported.
    pub async fn delete(&self, title: &str) -> Result<Completion, PoemError> {
        let result = self.try_delete(title).await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    async fn try_delete(&self, title: &str) -> Result<Completion, PoemError> {
        if !self.interaction.confirm(&format!("Delete the poem \"{title}\"?")) {
            return Ok(Completion::Cancelled);
        }
        self.store.delete_poem(title).await?;
        log::info!("deleted poem `{title}`");
        self.interaction.notify(Notice::Info(format!("Deleted \"{title}\".")));
        self.refresh_list().await;
        Ok(Completion::Done)
    }

    /// Import a picked text file as a new poem.
    ///
    /// # Errors
    ///
    /// Returns the validation or remote failure after it has been reported.
    pub async fn import(&self, file: ImportFile) -> Result<Completion, PoemError> {
        let result = self.try_import(file).await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    async fn try_import(&self, file: ImportFile) -> Result<Completion, PoemError> {
        if !import::is_text_file(&file.name, &file.content_type) {
            let kind = if file.content_type.is_empty() { file.name } else { file.content_type };
            return Err(ValidationError::NotTextFile(kind).into());
        }
        let lines = import::parse(&file.content)?;
        let Some(answer) = self.interaction.prompt("Title for the imported poem:", &import::default_title(&file.name))
        else {
            return Ok(Completion::Cancelled);
        };
        let title = answer.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        self.store.import_poem(title, &file.content).await?;
        log::info!("imported poem `{title}` ({} lines)", lines.len());
        self.interaction.notify(Notice::Info(format!("Imported \"{title}\".")));
        self.refresh_list().await;
        Ok(Completion::Done)
    }

    /// Show the full text of a saved poem. The draft is left alone.
    ///
    /// # Errors
    ///
    /// Returns the remote failure after it has been reported.
    pub async fn view(&self, title: &str) -> Result<(), PoemError> {
        let result = self.try_view(title).await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    async fn try_view(&self, title: &str) -> Result<(), PoemError> {
        let Some(seq) = self.state.update_with(WorkflowState::begin_view) else {
            return Ok(());
        };
        let lines = self.store.fetch_poem(title).await?;
        self.state.update_with(|s| s.show(seq, PoemDisplay::Poem { title: Some(title.to_owned()), lines }));
        Ok(())
    }

    async fn refresh_list(&self) {
        // A failed reload is rendered from `PoemListState::error`.
        let _ = self.list.reload().await;
    }

    fn report(&self, err: &PoemError) {
        if let PoemError::Remote(remote) = err {
            log::warn!("{remote}");
        }
        self.interaction.notify(Notice::Error(err.user_message()));
    }
}
