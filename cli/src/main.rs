mod render;
mod store;
mod terminal;

use std::cell::RefCell;
use std::io::{self, StdinLock, Stderr};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Parser, Subcommand};
use poems::workflow::{Completion, DEFAULT_LINE_INPUT};
use poems::{ImportFile, PoemDisplay, PoemError, PoemListState, PoemWorkflowController, WorkflowState};

use crate::store::ReqwestPoemStore;
use crate::terminal::TerminalInteraction;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not read {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Poem(#[from] PoemError),
    #[error("poem list unavailable: {0}")]
    ListUnavailable(String),
}

#[derive(Parser, Debug)]
#[command(name = "poet", about = "Electronic Poet command-line client")]
struct Cli {
    #[arg(long, env = "POET_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a poem, optionally saving it under a title.
    Generate {
        #[arg(default_value = DEFAULT_LINE_INPUT)]
        lines: String,
        #[arg(long, value_name = "TITLE")]
        save: Option<String>,
    },
    /// List saved poems with a two-line preview each.
    List,
    /// Print a saved poem.
    Show { title: String },
    /// Delete a saved poem.
    Delete {
        title: String,
        /// Skip the confirmation question.
        #[arg(long)]
        yes: bool,
    },
    /// Import a plain-text file as a saved poem.
    Import {
        path: PathBuf,
        /// Title to store it under; asked for when omitted.
        #[arg(long)]
        title: Option<String>,
    },
}

type Workflow = PoemWorkflowController<
    ReqwestPoemStore,
    Rc<RefCell<WorkflowState>>,
    Rc<RefCell<PoemListState>>,
    TerminalInteraction<StdinLock<'static>, Stderr>,
>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();
    tracing::debug!(base_url = %cli.base_url, "poem store");

    let store = Rc::new(ReqwestPoemStore::new(&cli.base_url)?);
    let mut interaction = TerminalInteraction::new(io::stdin().lock(), io::stderr());
    match &cli.command {
        Command::Delete { yes, .. } => interaction = interaction.assume_yes(*yes),
        Command::Import { title, .. } => interaction = interaction.with_title(title.clone()),
        _ => {}
    }
    let workflow: Workflow = PoemWorkflowController::new(
        store,
        Rc::new(RefCell::new(WorkflowState::default())),
        Rc::new(RefCell::new(PoemListState::default())),
        interaction,
    );

    match cli.command {
        Command::Generate { lines, save } => run_generate(&workflow, lines, save).await,
        Command::List => run_list(&workflow).await,
        Command::Show { title } => run_show(&workflow, &title).await,
        Command::Delete { title, .. } => {
            report(workflow.delete(&title).await?);
            Ok(())
        }
        Command::Import { path, .. } => run_import(&workflow, &path).await,
    }
}

async fn run_generate(workflow: &Workflow, lines: String, save: Option<String>) -> Result<(), CliError> {
    workflow.state().borrow_mut().line_input = lines;
    let generated = workflow.generate().await;
    print_display(&workflow.state().borrow().display);
    generated?;

    if let Some(title) = save {
        workflow.state().borrow_mut().title_input = title;
        workflow.save().await?;
    }
    Ok(())
}

async fn run_list(workflow: &Workflow) -> Result<(), CliError> {
    workflow.start().await;
    let list = workflow.list().state().borrow();
    if let Some(message) = list.error() {
        return Err(CliError::ListUnavailable(message.to_owned()));
    }
    print!("{}", render::summaries(&list.summaries()));
    Ok(())
}

async fn run_show(workflow: &Workflow, title: &str) -> Result<(), CliError> {
    workflow.view(title).await?;
    print_display(&workflow.state().borrow().display);
    Ok(())
}

async fn run_import(workflow: &Workflow, path: &Path) -> Result<(), CliError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| CliError::ReadFile { path: path.to_owned(), source })?;
    let name = path.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    // Local files carry no declared type; the `.txt` extension stands in.
    let file = ImportFile { name, content_type: String::new(), content };
    report(workflow.import(file).await?);
    Ok(())
}

fn print_display(display: &PoemDisplay) {
    if let Some(text) = render::poem(display) {
        print!("{text}");
    }
}

fn report(completion: Completion) {
    if completion == Completion::Cancelled {
        eprintln!("cancelled");
    }
}
