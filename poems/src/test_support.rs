//! In-memory poem store and interaction fakes shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::RemoteError;
use crate::remote::PoemStore;
use crate::workflow::{Interaction, Notice};

type Gate<T> = oneshot::Receiver<Result<T, RemoteError>>;

/// Behaves like the remote store, with hooks for scripting latency and
/// failures.
#[derive(Default)]
pub struct FakeStore {
    poems: RefCell<Vec<(String, Vec<String>)>>,
    draft: RefCell<Vec<String>>,
    next_generation: RefCell<Option<Vec<String>>>,
    list_gates: RefCell<VecDeque<Gate<Vec<String>>>>,
    fetch_gates: RefCell<HashMap<String, Gate<Vec<String>>>>,
    save_gates: RefCell<VecDeque<Gate<()>>>,
    failures: RefCell<HashMap<&'static str, RemoteError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeStore {
    pub fn with_poems(poems: &[(&str, &[&str])]) -> Rc<Self> {
        let store = Self::default();
        *store.poems.borrow_mut() = poems
            .iter()
            .map(|(title, lines)| ((*title).to_owned(), lines.iter().map(|l| (*l).to_owned()).collect()))
            .collect();
        Rc::new(store)
    }

    /// Lines returned by the next `generate` call.
    pub fn generate_next(&self, lines: &[&str]) {
        *self.next_generation.borrow_mut() = Some(lines.iter().map(|l| (*l).to_owned()).collect());
    }

    /// Make the next call of `operation` fail with `err`.
    pub fn fail_next(&self, operation: &'static str, err: RemoteError) {
        self.failures.borrow_mut().insert(operation, err);
    }

    /// Hold the next `list_titles` call until the returned sender fires.
    pub fn gate_list(&self) -> oneshot::Sender<Result<Vec<String>, RemoteError>> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.borrow_mut().push_back(rx);
        tx
    }

    /// Hold the next `save` call until the returned sender fires.
    pub fn gate_save(&self) -> oneshot::Sender<Result<(), RemoteError>> {
        let (tx, rx) = oneshot::channel();
        self.save_gates.borrow_mut().push_back(rx);
        tx
    }

    /// Hold the next `fetch_poem(title)` call until the returned sender fires.
    pub fn gate_fetch(&self, title: &str) -> oneshot::Sender<Result<Vec<String>, RemoteError>> {
        let (tx, rx) = oneshot::channel();
        self.fetch_gates.borrow_mut().insert(title.to_owned(), rx);
        tx
    }

    /// Names of the remote operations invoked so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls.borrow().iter().filter(|call| call.as_str() == operation).count()
    }

    pub fn titles(&self) -> Vec<String> {
        self.poems.borrow().iter().map(|(title, _)| title.clone()).collect()
    }

    pub fn lines_of(&self, title: &str) -> Option<Vec<String>> {
        self.poems.borrow().iter().find(|(t, _)| t == title).map(|(_, lines)| lines.clone())
    }

    fn enter(&self, operation: &'static str) -> Result<(), RemoteError> {
        self.calls.borrow_mut().push(operation.to_owned());
        match self.failures.borrow_mut().remove(operation) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn insert(&self, title: &str, lines: Vec<String>) -> Result<(), RemoteError> {
        let mut poems = self.poems.borrow_mut();
        if poems.iter().any(|(t, _)| t == title) {
            return Err(RemoteError::Rejected { message: format!("poem `{title}` already exists") });
        }
        poems.push((title.to_owned(), lines));
        Ok(())
    }
}

async fn open<T>(gate: Gate<T>) -> Result<T, RemoteError> {
    gate.await.unwrap_or_else(|_| Err(RemoteError::Transport("gate dropped".to_owned())))
}

#[async_trait(?Send)]
impl PoemStore for FakeStore {
    async fn generate(&self, line_count: u32) -> Result<Vec<String>, RemoteError> {
        self.enter("generate")?;
        let lines = self
            .next_generation
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (1..=line_count).map(|n| format!("line {n}")).collect());
        *self.draft.borrow_mut() = lines.clone();
        Ok(lines)
    }

    async fn save(&self, title: &str) -> Result<(), RemoteError> {
        self.enter("save")?;
        let gate = self.save_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            open(gate).await?;
        }
        let draft = self.draft.borrow().clone();
        if draft.is_empty() {
            return Err(RemoteError::Rejected { message: "nothing to save".to_owned() });
        }
        self.insert(title, draft)
    }

    async fn list_titles(&self) -> Result<Vec<String>, RemoteError> {
        self.enter("list")?;
        let gate = self.list_gates.borrow_mut().pop_front();
        match gate {
            Some(gate) => open(gate).await,
            None => Ok(self.titles()),
        }
    }

    async fn fetch_poem(&self, title: &str) -> Result<Vec<String>, RemoteError> {
        self.enter("fetch")?;
        let gate = self.fetch_gates.borrow_mut().remove(title);
        if let Some(gate) = gate {
            return open(gate).await;
        }
        self.lines_of(title)
            .ok_or_else(|| RemoteError::NotFound { title: title.to_owned(), message: "no such poem".to_owned() })
    }

    async fn delete_poem(&self, title: &str) -> Result<(), RemoteError> {
        self.enter("delete")?;
        let mut poems = self.poems.borrow_mut();
        let before = poems.len();
        poems.retain(|(t, _)| t != title);
        if poems.len() == before {
            return Err(RemoteError::Rejected { message: "delete failed".to_owned() });
        }
        Ok(())
    }

    async fn import_poem(&self, title: &str, raw_content: &str) -> Result<(), RemoteError> {
        self.enter("import")?;
        let lines = raw_content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        self.insert(title, lines)
    }
}

/// Scripted answers for confirmation and title prompts; records notices.
#[derive(Default)]
pub struct ScriptedInteraction {
    pub confirm_answer: Cell<bool>,
    pub prompt_answer: RefCell<Option<String>>,
    pub prompts: RefCell<Vec<(String, String)>>,
    pub notices: RefCell<Vec<Notice>>,
}

impl ScriptedInteraction {
    pub fn confirming() -> Rc<Self> {
        let interaction = Self::default();
        interaction.confirm_answer.set(true);
        Rc::new(interaction)
    }

    pub fn answering(title: &str) -> Rc<Self> {
        let interaction = Self::default();
        *interaction.prompt_answer.borrow_mut() = Some(title.to_owned());
        Rc::new(interaction)
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Interaction for Rc<ScriptedInteraction> {
    fn confirm(&self, _message: &str) -> bool {
        self.confirm_answer.get()
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        self.prompts.borrow_mut().push((message.to_owned(), default.to_owned()));
        self.prompt_answer.borrow().clone()
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
