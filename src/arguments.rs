use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "foro",
  version,
  about = "Write comments into a forum thread without leaving the terminal"
)]
pub(crate) struct Arguments {
  /// Output format for comments posted with --message
  #[arg(long, value_enum, default_value_t)]
  pub(crate) format: OutputFormat,

  /// Append diagnostics to this file
  #[arg(long, env = "FORO_LOG_FILE")]
  pub(crate) log_file: Option<PathBuf>,

  /// Post this comment and exit instead of opening the editor; repeat to
  /// post several in order
  #[arg(long = "message", short = 'm', value_name = "TEXT")]
  pub(crate) messages: Vec<String>,

  /// Base URL of the forum
  #[arg(long, env = "FORO_SERVER", default_value = DEFAULT_SERVER)]
  pub(crate) server: Url,

  /// Value sent as the Cookie header, e.g. `session=...`
  #[arg(long, env = "FORO_SESSION", hide_env_values = true)]
  pub(crate) session_cookie: Option<String>,

  /// Identifier of the thread to comment on
  #[arg(long, env = "FORO_THREAD")]
  pub(crate) thread: Option<ThreadId>,

  /// Address of the thread page; its last path segment names the thread
  #[arg(long, value_name = "URL")]
  pub(crate) thread_url: Option<String>,
}

impl Arguments {
  pub(crate) fn is_interactive(&self) -> bool {
    self.messages.is_empty()
  }

  /// `--thread-url` wins over `--thread` so a URL on the command line beats
  /// an identifier left in the environment.
  pub(crate) fn thread(&self) -> Result<ThreadId> {
    match (&self.thread_url, &self.thread) {
      (Some(url), _) => ThreadId::from_url(url),
      (None, Some(thread)) => Ok(thread.clone()),
      (None, None) => bail!("no thread given, pass --thread or --thread-url"),
    }
  }

  pub(crate) fn thread_page(
    &self,
    client: &Client,
    thread: &ThreadId,
  ) -> Result<Url> {
    match &self.thread_url {
      Some(url) => Ok(Url::parse(url)?),
      None => client.thread_page(thread),
    }
  }
}
