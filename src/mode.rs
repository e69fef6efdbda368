use super::*;

/// Which half of the screen receives keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Mode {
  #[default]
  Form,
  List,
}

impl Mode {
  pub(crate) fn handle_key(self, key: KeyEvent) -> Action {
    let modifiers = key.modifiers;

    let control = modifiers.contains(KeyModifiers::CONTROL);

    match self {
      Mode::Form => match key.code {
        KeyCode::Char('c') if control => Action::Quit,
        KeyCode::Char('o') if control => Action::OpenThread,
        KeyCode::Char('j') if control => Action::InsertNewline,
        KeyCode::Enter if modifiers.contains(KeyModifiers::ALT) => {
          Action::InsertNewline
        }
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::DeleteChar,
        KeyCode::Tab | KeyCode::Esc => Action::FocusList,
        KeyCode::Char(ch)
          if !control
            && !modifiers.contains(KeyModifiers::ALT)
            && !modifiers.contains(KeyModifiers::SUPER) =>
        {
          Action::InsertChar(ch)
        }
        _ => Action::None,
      },
      Mode::List => match key.code {
        KeyCode::Char('c') if control => Action::Quit,
        KeyCode::Char('d') if control => Action::PageDown,
        KeyCode::Char('u') if control => Action::PageUp,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Tab | KeyCode::Char('i') => Action::FocusForm,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Home => Action::SelectFirst,
        KeyCode::End => Action::SelectLast,
        KeyCode::Char('o' | 'O') => Action::OpenThread,
        _ => Action::None,
      },
    }
  }

  pub(crate) fn status(self) -> &'static str {
    match self {
      Mode::Form => FORM_STATUS,
      Mode::List => LIST_STATUS,
    }
  }
}
