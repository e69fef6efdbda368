use super::*;

pub(crate) struct State {
  help: HelpView,
  list_height: usize,
  message: String,
  mode: Mode,
  pending_effects: Vec<Effect>,
  submitter: CommentSubmitter<AlertView>,
  thread_page: Url,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn alert(&self) -> &AlertView {
    self.submitter.notifier()
  }

  pub(crate) fn alert_is_visible(&self) -> bool {
    self.alert().is_visible()
  }

  pub(crate) fn dispatch(&mut self, action: Action) -> Dispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "dispatch should start without pending effects"
    );

    let mut should_exit = false;

    let page = self.list_height.max(1);

    match action {
      Action::Quit => {
        should_exit = true;
      }
      Action::DismissAlert => self.submitter.notifier_mut().dismiss(),
      Action::ShowHelp => self.help.show(&mut self.message),
      Action::HideHelp => self.help.hide(&mut self.message),
      Action::FocusForm => self.focus(Mode::Form),
      Action::FocusList => self.focus(Mode::List),
      Action::InsertChar(ch) => self.submitter.form_mut().insert(ch),
      Action::InsertNewline => self.submitter.form_mut().insert_newline(),
      Action::DeleteChar => self.submitter.form_mut().backspace(),
      Action::Submit => self.submit(),
      Action::OpenThread => self.pending_effects.push(Effect::OpenUrl {
        url: self.thread_page.to_string(),
      }),
      Action::SelectNext => self.submitter.list_mut().select_next(),
      Action::SelectPrevious => self.submitter.list_mut().select_previous(),
      Action::SelectFirst => self.submitter.list_mut().select_first(),
      Action::SelectLast => self.submitter.list_mut().select_last(),
      Action::PageDown => self.submitter.list_mut().page_down(page),
      Action::PageUp => self.submitter.list_mut().page_up(page),
      Action::None => {}
    }

    Dispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn focus(&mut self, mode: Mode) {
    self.mode = mode;

    if !self.help.is_visible() {
      self.message = mode.status().into();
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::CommentSubmitted { result } => {
        self.submitter.finish_submit(result);
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> Mode {
    self.mode
  }

  pub(crate) fn new(
    submitter: CommentSubmitter<AlertView>,
    thread_page: Url,
  ) -> Self {
    let mode = Mode::default();

    Self {
      help: HelpView::new(),
      list_height: 0,
      message: mode.status().into(),
      mode,
      pending_effects: Vec::new(),
      submitter,
      thread_page,
      transient_message: None,
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_list_offset(&mut self, offset: usize) {
    self.submitter.list_mut().set_offset(offset);
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let restore = match &self.transient_message {
      Some(transient) if self.message == transient.text() => {
        transient.restore().to_string()
      }
      _ => self.message.clone(),
    };

    self.message.clone_from(&message);

    self.transient_message = Some(TransientMessage::new(message, restore));
  }

  fn submit(&mut self) {
    if let Some(submission) = self.submitter.begin_submit() {
      self.pending_effects.push(Effect::SubmitComment { submission });
    }
  }

  pub(crate) fn submitter(&self) -> &CommentSubmitter<AlertView> {
    &self.submitter
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired_at(Instant::now()) {
        self.message = transient.restore().to_string();
        self.transient_message = None;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::submit_error::EMPTY_CONTENT_ALERT};

  fn sample_state() -> State {
    let client =
      Client::new(Url::parse("http://localhost:5000").unwrap(), None).unwrap();

    let submitter = CommentSubmitter::new(
      client,
      "42".parse().unwrap(),
      AlertView::default(),
    )
    .unwrap();

    State::new(
      submitter,
      Url::parse("http://localhost:5000/hilo/42").unwrap(),
    )
  }

  fn type_text(state: &mut State, text: &str) {
    for ch in text.chars() {
      state.dispatch(Action::InsertChar(ch));
    }
  }

  #[test]
  fn submit_with_blank_form_raises_alert_without_effect() {
    let mut state = sample_state();

    type_text(&mut state, "   ");

    let dispatch = state.dispatch(Action::Submit);

    assert!(dispatch.effects.is_empty());
    assert!(!dispatch.should_exit);
    assert_eq!(state.alert().current(), Some(EMPTY_CONTENT_ALERT));

    state.dispatch(Action::DismissAlert);

    assert!(!state.alert_is_visible());
  }

  #[test]
  fn submit_emits_request_effect() {
    let mut state = sample_state();

    type_text(&mut state, " Hola ");

    let dispatch = state.dispatch(Action::Submit);

    assert_eq!(dispatch.effects.len(), 1);

    match &dispatch.effects[0] {
      Effect::SubmitComment { submission } => {
        assert_eq!(submission.content, "Hola");
        assert_eq!(
          submission.endpoint.as_str(),
          "http://localhost:5000/comentario_ajax/42"
        );
      }
      other => panic!("unexpected effect: {other:?}"),
    }

    assert_eq!(state.submitter().form().value(), " Hola ");
  }

  #[test]
  fn submitted_comment_event_appends_and_clears() {
    let mut state = sample_state();

    type_text(&mut state, "Hola");

    state.handle_event(Event::CommentSubmitted {
      result: Ok(Comment {
        author: "Ana".into(),
        content: "Hola".into(),
        date: "2024-01-01 10:00".into(),
      }),
    });

    assert_eq!(state.submitter().list().len(), 1);
    assert!(state.submitter().form().is_empty());
    assert!(!state.alert_is_visible());
  }

  #[test]
  fn failed_submission_event_keeps_form() {
    let mut state = sample_state();

    type_text(&mut state, "Hola");

    state.handle_event(Event::CommentSubmitted {
      result: Err(SubmitError::Rejected {
        message: Some("Not logged in".into()),
        status: StatusCode::UNAUTHORIZED,
      }),
    });

    assert_eq!(state.alert().current(), Some("Not logged in"));
    assert!(state.submitter().list().is_empty());
    assert_eq!(state.submitter().form().value(), "Hola");
  }

  #[test]
  fn open_thread_emits_thread_page() {
    let mut state = sample_state();

    let dispatch = state.dispatch(Action::OpenThread);

    match dispatch.effects.as_slice() {
      [Effect::OpenUrl { url }] => {
        assert_eq!(url, "http://localhost:5000/hilo/42");
      }
      other => panic!("unexpected effects: {other:?}"),
    }
  }

  #[test]
  fn focus_switches_status_line() {
    let mut state = sample_state();

    assert_eq!(state.message(), FORM_STATUS);

    state.dispatch(Action::FocusList);

    assert_eq!(state.mode(), Mode::List);
    assert_eq!(state.message(), LIST_STATUS);
  }

  #[test]
  fn transient_message_keeps_original_status() {
    let mut state = sample_state();

    state.set_transient_message("first".into());
    state.set_transient_message("second".into());

    assert_eq!(state.message(), "second");

    assert_eq!(
      state
        .transient_message
        .as_ref()
        .map(TransientMessage::restore),
      Some(FORM_STATUS)
    );
  }
}
