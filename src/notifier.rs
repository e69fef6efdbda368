use super::*;

/// Blocking, user-facing message. The submitter raises every failure
/// through this and nothing else.
pub(crate) trait Notifier {
  fn alert(&mut self, message: &str);
}

#[derive(Debug)]
pub(crate) struct StderrNotifier {
  use_color: bool,
}

impl Default for StderrNotifier {
  fn default() -> Self {
    Self {
      use_color: io::stderr().is_terminal(),
    }
  }
}

impl Notifier for StderrNotifier {
  fn alert(&mut self, message: &str) {
    if self.use_color {
      eprintln!("{} {message}", "error:".bold().red());
    } else {
      eprintln!("error: {message}");
    }
  }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
  pub(crate) alerts: Vec<String>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
  fn alert(&mut self, message: &str) {
    self.alerts.push(message.to_string());
  }
}
