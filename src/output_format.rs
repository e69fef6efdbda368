use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
  Html,
  #[default]
  Text,
}

impl OutputFormat {
  pub(crate) fn render(self, entry: &CommentEntry) -> String {
    match self {
      Self::Html => entry.to_html(),
      Self::Text => entry.to_text(),
    }
  }
}
