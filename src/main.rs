use {
  action::Action,
  alert_view::AlertView,
  anyhow::{Context, anyhow, bail},
  app::App,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  client::Client,
  comment::Comment,
  comment_entry::CommentEntry,
  comment_form::CommentForm,
  comment_list::CommentList,
  comment_submitter::CommentSubmitter,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  dispatch::Dispatch,
  effect::Effect,
  error_response::ErrorResponse,
  event::Event,
  help_view::HelpView,
  mode::Mode,
  new_comment::NewComment,
  notifier::{Notifier, StderrNotifier},
  output_format::OutputFormat,
  percent_encoding::percent_decode_str,
  post::post_messages,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
  },
  reqwest::{StatusCode, Url, header},
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::VecDeque,
    fmt::{self, Display, Formatter},
    fs::OpenOptions,
    io::{self, IsTerminal, Stdout, Write},
    path::{Path, PathBuf},
    process,
    str::FromStr,
    time::{Duration, Instant},
  },
  submission::Submission,
  submit_error::SubmitError,
  thiserror::Error,
  thread_id::ThreadId,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{deserialize_display_string, popup_area, truncate, wrap_text},
};

mod action;
mod alert_view;
mod app;
mod arguments;
mod client;
mod comment;
mod comment_entry;
mod comment_form;
mod comment_list;
mod comment_submitter;
mod dispatch;
mod effect;
mod error_response;
mod event;
mod help_view;
mod logging;
mod mode;
mod new_comment;
mod notifier;
mod output_format;
mod post;
mod state;
mod submission;
mod submit_error;
mod thread_id;
mod transient_message;
mod utils;

const DEFAULT_SERVER: &str = "http://localhost:5000";

const FORM_STATUS: &str = "enter send • alt+enter newline • tab comments • ctrl+o open thread • ctrl+c quit";

const LIST_STATUS: &str = "↑/k up • ↓/j down • tab/i write • o open thread • ? help • q/esc quit";

const FORM_TITLE: &str = "Comentario";
const FORM_PLACEHOLDER: &str = "Press tab or i to write a comment";

const MAX_FORM_LINES: u16 = 6;

const EMPTY_LIST_TEXT: &str = "No comments yet. Write one below.";

const ALERT_TITLE: &str = "Aviso";
const ALERT_HINT: &str = "enter to dismiss";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Writing (form focused):
  type      edit the comment
  enter     send the comment
  alt+enter insert a line break (also ctrl+j)
  backspace delete the last character
  tab/esc   move to the comment list
  ctrl+o    open the thread in your browser
  ctrl+c    quit

Reading (list focused):
  ↑ / k     move selection up
  ↓ / j     move selection down
  pg↓       page down
  pg↑       page up
  ctrl+d    page down
  ctrl+u    page up
  home      jump to first comment
  end       jump to last comment
  o         open the thread in your browser
  tab / i   back to writing
  q / esc   quit
  ?         toggle this help

Errors are shown in a box; press enter to dismiss it.
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let _guard =
    logging::init(arguments.log_file.as_deref(), arguments.is_interactive())?;

  let thread = arguments.thread()?;

  let client =
    Client::new(arguments.server.clone(), arguments.session_cookie.clone())?;

  tracing::info!(server = %arguments.server, %thread, "starting");

  if !arguments.is_interactive() {
    let mut submitter =
      CommentSubmitter::new(client, thread, StderrNotifier::default())?;

    return post_messages(
      &mut submitter,
      &arguments.messages,
      arguments.format,
      &mut io::stdout(),
    )
    .await;
  }

  let thread_page = arguments.thread_page(&client, &thread)?;

  let submitter = CommentSubmitter::new(client, thread, AlertView::default())
    .context("could not set up the comment form")?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(State::new(submitter, thread_page));

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
