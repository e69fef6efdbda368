use super::*;

/// Modal alert for the terminal. While an alert is showing it takes every
/// key; alerts raised meanwhile wait their turn.
#[derive(Debug, Default)]
pub(crate) struct AlertView {
  queue: VecDeque<String>,
}

impl AlertView {
  pub(crate) fn current(&self) -> Option<&str> {
    self.queue.front().map(String::as_str)
  }

  pub(crate) fn dismiss(&mut self) {
    self.queue.pop_front();
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let Some(message) = self.current() else {
      return;
    };

    let text = format!("{message}\n\n{ALERT_HINT}");

    let area = popup_area(frame.area(), &text);

    frame.render_widget(Clear, area);

    let alert = Paragraph::new(text)
      .block(
        Block::default()
          .title(ALERT_TITLE)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(Color::Red)),
      )
      .wrap(Wrap { trim: false });

    frame.render_widget(alert, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Action {
    match key.code {
      KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
        Action::DismissAlert
      }
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        Action::Quit
      }
      _ => Action::None,
    }
  }

  pub(crate) fn is_visible(&self) -> bool {
    !self.queue.is_empty()
  }
}

impl Notifier for AlertView {
  fn alert(&mut self, message: &str) {
    self.queue.push_back(message.to_string());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn alerts_are_shown_one_at_a_time() {
    let mut view = AlertView::default();

    assert!(!view.is_visible());

    view.alert("first");
    view.alert("second");

    assert_eq!(view.current(), Some("first"));

    view.dismiss();
    assert_eq!(view.current(), Some("second"));

    view.dismiss();
    assert!(!view.is_visible());
  }

  #[test]
  fn only_dismiss_keys_close_the_alert() {
    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let letter = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

    assert_eq!(AlertView::handle_key(enter), Action::DismissAlert);
    assert_eq!(AlertView::handle_key(letter), Action::None);
  }
}
