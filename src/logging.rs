use super::*;

const LOG_ENV: &str = "FORO_LOG";

fn filter(default: &str) -> EnvFilter {
  EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber. With a log file everything at `FORO_LOG`
/// (default `info`) is appended there; without one the terminal editor logs
/// nothing, since it owns the screen, and one-shot runs log to stderr at
/// `FORO_LOG` (default `error`).
///
/// The returned guard flushes the file writer when dropped.
pub(crate) fn init(
  log_file: Option<&Path>,
  interactive: bool,
) -> Result<Option<WorkerGuard>> {
  if let Some(path) = log_file {
    let file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("could not open log file `{}`", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
      .with_env_filter(filter("info"))
      .with_writer(writer)
      .with_ansi(false)
      .try_init()
      .map_err(|error| anyhow!("could not install logger: {error}"))?;

    return Ok(Some(guard));
  }

  if !interactive {
    tracing_subscriber::fmt()
      .with_env_filter(filter("error"))
      .with_writer(io::stderr)
      .try_init()
      .map_err(|error| anyhow!("could not install logger: {error}"))?;
  }

  Ok(None)
}
