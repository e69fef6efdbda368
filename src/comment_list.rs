use super::*;

/// Append-only container of rendered comments, plus the scroll position the
/// terminal view keeps over it.
#[derive(Debug, Default)]
pub(crate) struct CommentList {
  entries: Vec<CommentEntry>,
  offset: usize,
  selected: usize,
}

impl CommentList {
  /// Adds `entry` after every existing entry and returns its index. A
  /// selection resting on the last entry follows the new one.
  pub(crate) fn append(&mut self, entry: CommentEntry) -> usize {
    let following = self.selected_index().is_none_or(|selected| {
      selected == self.entries.len().saturating_sub(1)
    });

    self.entries.push(entry);

    let index = self.entries.len().saturating_sub(1);

    if following {
      self.selected = index;
    }

    index
  }

  pub(crate) fn entries(&self) -> &[CommentEntry] {
    &self.entries
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.entries.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn page_down(&mut self, page: usize) {
    self.set_selected(self.selected.saturating_add(page.max(1)));
  }

  pub(crate) fn page_up(&mut self, page: usize) {
    self.set_selected(self.selected.saturating_sub(page.max(1)));
  }

  pub(crate) fn select_first(&mut self) {
    self.set_selected(0);
  }

  pub(crate) fn select_last(&mut self) {
    self.set_selected(self.entries.len().saturating_sub(1));
  }

  pub(crate) fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.entries.is_empty() {
      None
    } else {
      Some(self.selected.min(self.entries.len().saturating_sub(1)))
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.entries.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.entries.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  fn set_selected(&mut self, index: usize) {
    if self.entries.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.entries.len().saturating_sub(1));
    }
  }
}
