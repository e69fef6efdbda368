#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  DeleteChar,
  DismissAlert,
  FocusForm,
  FocusList,
  HideHelp,
  InsertChar(char),
  InsertNewline,
  None,
  OpenThread,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  Submit,
}
