use super::*;

#[derive(Debug, Default)]
pub(crate) struct CommentForm {
  buffer: String,
}

impl CommentForm {
  pub(crate) fn backspace(&mut self) {
    self.buffer.pop();
  }

  pub(crate) fn clear(&mut self) {
    self.buffer.clear();
  }

  /// What gets submitted: the field value without surrounding whitespace.
  pub(crate) fn content(&self) -> &str {
    self.buffer.trim()
  }

  pub(crate) fn insert(&mut self, ch: char) {
    self.buffer.push(ch);
  }

  pub(crate) fn insert_newline(&mut self) {
    self.buffer.push('\n');
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub(crate) fn set(&mut self, value: impl Into<String>) {
    self.buffer = value.into();
  }

  pub(crate) fn value(&self) -> &str {
    &self.buffer
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn content_is_trimmed_but_value_is_kept() {
    let mut form = CommentForm::default();

    form.set("  Hola\n\n");

    assert_eq!(form.content(), "Hola");
    assert_eq!(form.value(), "  Hola\n\n");
  }

  #[test]
  fn editing_builds_multiline_text() {
    let mut form = CommentForm::default();

    for ch in "ab".chars() {
      form.insert(ch);
    }

    form.insert_newline();
    form.insert('c');
    form.insert('d');
    form.backspace();

    assert_eq!(form.value(), "ab\nc");

    form.clear();

    assert!(form.is_empty());
  }
}
