use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_list_item(entry: &CommentEntry, available_width: u16) -> ListItem {
    let header = Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        entry.author.clone(),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw(" "),
      Span::styled(entry.date.clone(), Style::default().fg(Color::DarkGray)),
    ]);

    let mut lines = vec![header];

    let prefix_width = BASE_INDENT.chars().count();

    let wrap_width = (available_width as usize)
      .saturating_sub(prefix_width)
      .max(1);

    for line in wrap_text(entry.body(), wrap_width) {
      lines.push(Line::from(vec![Span::raw(BASE_INDENT), Span::raw(line)]));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let form_line_count =
      self.state.submitter().form().value().split('\n').count();

    let form_height = u16::try_from(form_line_count)
      .unwrap_or(u16::MAX)
      .clamp(1, MAX_FORM_LINES)
      .saturating_add(2);

    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(form_height),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[1].height as usize);

    let submitter = self.state.submitter();

    let form = submitter.form();

    let form_lines = form.value().split('\n').collect::<Vec<_>>();

    let count = submitter.list().len();

    let title = Paragraph::new(Line::from(vec![
      Span::styled(
        format!("Hilo {}", submitter.thread()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        match count {
          1 => " · 1 comment".to_string(),
          _ => format!(" · {count} comments"),
        },
        Style::default().fg(Color::DarkGray),
      ),
    ]));

    frame.render_widget(title, layout[0]);

    let list = submitter.list();

    let list_items: Vec<ListItem> = if list.is_empty() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(EMPTY_LIST_TEXT),
      ]))]
    } else {
      list
        .entries()
        .iter()
        .map(|entry| Self::comment_list_item(entry, layout[1].width))
        .collect()
    };

    let list_focused = self.state.mode() == Mode::List;

    let mut list_state = ListState::default()
      .with_selected(list.selected_index().filter(|_| list_focused))
      .with_offset(list.offset());

    let list_widget = List::new(list_items).highlight_style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list_widget, layout[1], &mut list_state);

    let form_focused = self.state.mode() == Mode::Form;

    let visible_lines = usize::from(form_height.saturating_sub(2));

    let shown = &form_lines[form_lines.len().saturating_sub(visible_lines)..];

    let form_text = if form.is_empty() && !form_focused {
      vec![Line::from(Span::styled(
        FORM_PLACEHOLDER,
        Style::default().fg(Color::DarkGray),
      ))]
    } else {
      shown
        .iter()
        .map(|line| Line::from((*line).to_string()))
        .collect::<Vec<_>>()
    };

    let form_widget = Paragraph::new(form_text).block(
      Block::default()
        .title(FORM_TITLE)
        .borders(Borders::ALL)
        .border_style(if form_focused {
          Style::default().fg(Color::Cyan)
        } else {
          Style::default().fg(Color::DarkGray)
        }),
    );

    frame.render_widget(form_widget, layout[2]);

    if form_focused
      && !self.state.alert_is_visible()
      && !self.state.help_is_visible()
    {
      let last = shown.last().map_or(0, |line| line.chars().count());

      let x = layout[2]
        .x
        .saturating_add(1)
        .saturating_add(u16::try_from(last).unwrap_or(u16::MAX))
        .min(layout[2].right().saturating_sub(2));

      let y = layout[2]
        .y
        .saturating_add(u16::try_from(shown.len()).unwrap_or(u16::MAX));

      frame.set_cursor_position(Position { x, y });
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[3]);

    self.state.help().draw(frame);

    self.state.alert().draw(frame);

    let offset = list_state.offset();

    self.state.set_list_offset(offset);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::SubmitComment { submission } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::CommentSubmitted {
            result: submission.send(&client).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          tracing::warn!(%url, %error, "could not open browser");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client: state.submitter().client().clone(),
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let action = if self.state.alert_is_visible() {
        AlertView::handle_key(key)
      } else if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.mode().handle_key(key)
      };

      let dispatch = self.state.dispatch(action);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }
}
