use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_list_item(
    entry: &CommentEntry,
    available_width: u16,
  ) -> ListItem {
    let depth_indent = "  ".repeat(entry.depth);
    let indent = format!("{BASE_INDENT}{depth_indent}");

    let toggle = entry.has_children().then_some(if entry.expanded {
      "[-]"
    } else {
      "[+]"
    });

    let mut header = vec![Span::raw(indent.clone())];

    if let Some(symbol) = toggle {
      header.push(Span::raw(symbol));
      header.push(Span::raw(" "));
    }

    header.push(Span::styled(
      entry.identity(),
      Style::default().fg(Color::White),
    ));

    header.push(Span::raw(" · "));

    header.push(Span::styled(
      entry.created_label().to_string(),
      Style::default().fg(Color::DarkGray),
    ));

    let mut lines = vec![Line::from(header)];

    if !entry.content.is_empty() {
      let prefix_width = indent.chars().count();

      let max_width = usize::from(available_width);
      let wrap_width = max_width.saturating_sub(prefix_width).max(1);

      for line in wrap_text(&entry.content, wrap_width) {
        lines.push(Line::from(vec![
          Span::raw(indent.clone()),
          Span::styled(line, Style::default().fg(Color::Gray)),
        ]));
      }
    }

    let like_style = if entry.liked {
      Style::default().fg(Color::Cyan)
    } else {
      Style::default().fg(Color::DarkGray)
    };

    let mut actions = vec![
      Span::raw(indent.clone()),
      Span::styled("reply", Style::default().fg(Color::DarkGray)),
      Span::raw(" · "),
      Span::styled(entry.like_label(), like_style),
    ];

    if entry.editable {
      actions.push(Span::raw(" · "));
      actions.push(Span::styled("edit", Style::default().fg(Color::DarkGray)));
      actions.push(Span::raw(" · "));
      actions.push(Span::styled(
        "delete",
        Style::default().fg(Color::DarkGray),
      ));
    }

    lines.push(Line::from(actions));

    lines.push(Line::from(Span::raw(indent)));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    let subtitle = match self.state.mode() {
      Mode::Posts(_) => {
        if self.state.session().user_id().is_none() {
          "community discussions · signed out".to_string()
        } else {
          "community discussions".to_string()
        }
      }
      Mode::Thread(view) => self
        .state
        .thread_title(view.container_id())
        .map_or_else(|| "comments".to_string(), |title| truncate(title, 60)),
    };

    let header = Paragraph::new(Line::from(vec![
      Span::styled(
        "agora",
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw(" — "),
      Span::styled(subtitle, Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(header, layout[0]);

    let (list_items, selected_index, offset) = match self.state.mode_mut() {
      Mode::Posts(view) => {
        let selected_index = view.selected_index();
        let offset = view.offset();

        let list_items: Vec<ListItem> = if view.is_empty() {
          vec![ListItem::new(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::raw("No posts yet."),
          ]))]
        } else {
          view
            .items()
            .iter()
            .map(|post| {
              let lines = vec![
                Line::from(vec![
                  Span::raw(BASE_INDENT),
                  Span::styled(
                    post.title.clone(),
                    Style::default().fg(Color::White),
                  ),
                ]),
                Line::from(vec![
                  Span::raw(BASE_INDENT),
                  Span::styled(
                    post.detail(),
                    Style::default().fg(Color::DarkGray),
                  ),
                ]),
                Line::from(Span::raw(BASE_INDENT)),
              ];

              ListItem::new(lines)
            })
            .collect()
        };

        (list_items, selected_index, offset)
      }
      Mode::Thread(view) => {
        let (visible, selected_pos) = view.visible_with_selection();

        let list_items: Vec<ListItem> = if visible.is_empty() {
          vec![ListItem::new(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::raw("No comments yet. Press c to comment."),
          ]))]
        } else {
          visible
            .iter()
            .map(|&idx| {
              Self::comment_list_item(&view.entries[idx], layout[1].width)
            })
            .collect()
        };

        let offset = view.offset.min(selected_pos.unwrap_or(0));

        (list_items, selected_pos, offset)
      }
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self.state.mode_mut().set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::CreateComment {
        container_id,
        content,
        parent,
        request_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::CommentCreated {
            request_id,
            result: client
              .create_comment(&container_id, &content, parent.as_deref())
              .await,
          });
        });
      }
      Effect::DeleteComment {
        comment_id,
        container_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let result = client.delete_comment(&comment_id).await;

          let _ = sender.send(Event::CommentDeleted {
            comment_id,
            container_id,
            result,
          });
        });
      }
      Effect::FetchThread {
        container_id,
        request_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::Thread {
            request_id,
            result: client.fetch_thread(&container_id).await,
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
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
      Effect::ToggleLike {
        comment_id,
        container_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let result = client.toggle_like(&comment_id).await;

          let _ = sender.send(Event::CommentLiked {
            comment_id,
            container_id,
            result,
          });
        });
      }
      Effect::UpdateComment {
        comment_id,
        content,
        request_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::CommentUpdated {
            request_id,
            result: client.update_comment(&comment_id, &content).await,
          });
        });
      }
    }
  }

  pub(crate) fn new(
    client: Client,
    base_url: String,
    posts: Vec<Post>,
    profile: Option<Profile>,
    session: Session,
  ) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let state = State::new(base_url, posts, profile, session);

    Self {
      client,
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
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.composer_command(key) {
        command
      } else if let Some(command) = self.state.confirm_command(key) {
        command
      } else {
        let page = self.state.list_height().max(1);
        self.state.mode_mut().handle_key(key, page)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }

      self.process_pending_events();
    }

    Ok(())
  }
}
