use super::*;

pub(crate) struct State {
  base_url: String,
  composer: Option<Composer>,
  help: HelpView,
  list_height: usize,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_delete: Option<String>,
  pending_effects: Vec<Effect>,
  pending_thread: Option<PendingThread>,
  posts: Option<ListView<Post>>,
  session: Session,
  store: CommentStore,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn cancel_composer(&mut self) {
    if let Some(composer) = self.composer.take() {
      self.message = composer.message_backup;
    }
  }

  fn cancel_delete(&mut self) {
    if self.pending_delete.take().is_some() && !self.help.is_visible() {
      self.message = THREAD_STATUS.into();
    }
  }

  fn close_thread(&mut self) {
    if !matches!(self.mode, Mode::Thread(_)) {
      return;
    }

    // Dropping the view means the next open refetches, so authorship-gated
    // affordances are always derived from fresh data.
    self.mode = Mode::Posts(self.posts.take().unwrap_or_default());

    if !self.help.is_visible() {
      self.message = POSTS_STATUS.into();
    }
  }

  fn compose_comment(&mut self) {
    if self.composer.is_some() {
      return;
    }

    let Mode::Thread(view) = &self.mode else {
      return;
    };

    let target = ComposerTarget::Comment {
      container_id: view.container_id().to_string(),
    };

    self.start_composer(target, String::new());
  }

  fn compose_reply(&mut self) {
    if self.composer.is_some() {
      return;
    }

    let Mode::Thread(view) = &self.mode else {
      return;
    };

    let Some(entry) = view.selected_entry() else {
      return;
    };

    let target = ComposerTarget::Reply {
      container_id: view.container_id().to_string(),
      parent_id: entry.id.clone(),
    };

    self.start_composer(target, String::new());
  }

  pub(crate) fn composer_command(&mut self, key: KeyEvent) -> Option<Command> {
    let composer = self.composer.as_ref()?;

    if composer.is_saving() {
      return Some(Command::None);
    }

    match key.code {
      KeyCode::Esc => Some(Command::CancelComposer),
      KeyCode::Enter => Some(Command::SubmitComposer),
      KeyCode::Backspace => {
        if let Some(composer) = self.composer.as_mut() {
          composer.buffer.pop();
        }

        self.update_composer_message();

        Some(Command::None)
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Some(Command::None);
        }

        if let Some(composer) = self.composer.as_mut() {
          composer.buffer.push(ch);
        }

        self.update_composer_message();

        Some(Command::None)
      }
      _ => Some(Command::None),
    }
  }

  pub(crate) fn confirm_command(&mut self, key: KeyEvent) -> Option<Command> {
    self.pending_delete.as_ref()?;

    match key.code {
      KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
        Some(Command::ConfirmDelete)
      }
      KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Command::CancelDelete),
      _ => Some(Command::None),
    }
  }

  fn confirm_delete(&mut self) {
    let Some(comment_id) = self.pending_delete.take() else {
      return;
    };

    let Mode::Thread(view) = &self.mode else {
      return;
    };

    self.pending_effects.push(Effect::DeleteComment {
      comment_id,
      container_id: view.container_id().to_string(),
    });

    if !self.help.is_visible() {
      self.message = THREAD_STATUS.into();
    }
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::OpenThread => self.open_thread(),
      Command::CloseThread => self.close_thread(),
      Command::OpenInBrowser => self.open_in_browser(),
      Command::ComposeComment => self.compose_comment(),
      Command::ComposeReply => self.compose_reply(),
      Command::EditComment => self.edit_selected(),
      Command::DeleteComment => self.request_delete(),
      Command::ConfirmDelete => self.confirm_delete(),
      Command::CancelDelete => self.cancel_delete(),
      Command::LikeComment => self.like_selected(),
      Command::SubmitComposer => self.submit_composer(),
      Command::CancelComposer => self.cancel_composer(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn edit_selected(&mut self) {
    if self.composer.is_some() {
      return;
    }

    let Mode::Thread(view) = &self.mode else {
      return;
    };

    let Some(entry) = view.selected_entry() else {
      return;
    };

    let editable = entry.editable;
    let comment_id = entry.id.clone();
    let buffer = entry.content.clone();

    if !editable {
      self
        .set_transient_message("You can only edit your own comments.".into());
      return;
    }

    self.start_composer(ComposerTarget::Edit { comment_id }, buffer);
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::CommentCreated { request_id, result } => match result {
        Ok(comment) => {
          let container_id = comment.post.clone();

          self.store.append(&container_id, comment);

          let submitted = self
            .composer
            .as_ref()
            .is_some_and(|composer| composer.in_flight == Some(request_id));

          if submitted
            && let Some(composer) = self.composer.take()
            && !self.help.is_visible()
          {
            self.message = composer.message_backup;
          }

          self.refresh_thread(&container_id);

          if !self.help.is_visible() {
            self.set_transient_message("Comment posted.".into());
          }
        }
        Err(error) => {
          if let Some(composer) = self.composer.as_mut()
            && composer.in_flight == Some(request_id)
          {
            composer.in_flight = None;
          }

          let message = match error.downcast_ref::<ApiError>() {
            Some(ApiError::NotAuthorized) => {
              "You must be signed in to comment.".to_string()
            }
            _ => format!("Could not post comment: {error}"),
          };

          if !self.help.is_visible() {
            self.set_transient_message(message);
          }
        }
      },
      Event::CommentDeleted {
        comment_id,
        container_id,
        result,
      } => match result {
        Ok(()) => {
          self.store.remove(&container_id, &comment_id);
          self.refresh_thread(&container_id);

          if !self.help.is_visible() {
            self.set_transient_message("Comment deleted.".into());
          }
        }
        Err(error) => match error.downcast_ref::<ApiError>() {
          Some(ApiError::NotFound) => {
            // Already gone upstream; drop it locally too.
            self.store.remove(&container_id, &comment_id);
            self.refresh_thread(&container_id);
          }
          Some(ApiError::NotAuthorized) => {
            if !self.help.is_visible() {
              self.set_transient_message(
                "You are not authorized to delete this comment.".into(),
              );
            }
          }
          _ => {
            if !self.help.is_visible() {
              self.set_transient_message(format!(
                "Could not delete comment: {error}"
              ));
            }
          }
        },
      },
      Event::CommentLiked {
        comment_id,
        container_id,
        result,
      } => match result {
        Ok(like) => {
          self.store.apply_like(&container_id, &comment_id, like);

          if let Mode::Thread(view) = &mut self.mode
            && view.container_id() == container_id
          {
            view.patch_like(&comment_id, like);
          }
        }
        Err(error) => {
          let message = match error.downcast_ref::<ApiError>() {
            Some(ApiError::NotAuthorized) => {
              "You must be signed in to like comments.".to_string()
            }
            _ => format!("Could not update like: {error}"),
          };

          if !self.help.is_visible() {
            self.set_transient_message(message);
          }
        }
      },
      Event::CommentUpdated { request_id, result } => {
        let submitted = self
          .composer
          .as_ref()
          .is_some_and(|composer| composer.in_flight == Some(request_id));

        if !submitted {
          return;
        }

        match result {
          Ok(comment) => {
            self.store.apply_edit(&comment.post, &comment);

            if let Mode::Thread(view) = &mut self.mode
              && view.container_id() == comment.post
            {
              view.patch_content(&comment.id, &comment.content);
            }

            if let Some(composer) = self.composer.take()
              && !self.help.is_visible()
            {
              self.message = composer.message_backup;
            }

            if !self.help.is_visible() {
              self.set_transient_message("Comment updated.".into());
            }
          }
          Err(error) => {
            if let Some(composer) = self.composer.as_mut() {
              composer.in_flight = None;
            }

            self.update_composer_message();

            let message = match error.downcast_ref::<ApiError>() {
              Some(ApiError::NotAuthorized) => {
                "You are not authorized to edit this comment.".to_string()
              }
              _ => format!("Could not update comment: {error}"),
            };

            if !self.help.is_visible() {
              self.set_transient_message(message);
            }
          }
        }
      }
      Event::Thread { request_id, result } => {
        let Some(pending) = self.pending_thread.as_ref() else {
          return;
        };

        if pending.request_id != request_id {
          return;
        }

        let Some(pending) = self.pending_thread.take() else {
          return;
        };

        match result {
          Ok(comments) => {
            let empty = comments.is_empty();

            self.store.replace(&pending.container_id, comments);

            let comments = self.store.thread(&pending.container_id).to_vec();

            let view = ThreadView::new(
              pending.container_id,
              CommentNode::forest(comments),
              &self.session,
            );

            if let Mode::Posts(posts) = &mut self.mode {
              self.posts = Some(std::mem::take(posts));
            }

            self.mode = Mode::Thread(view);

            if !self.help.is_visible() {
              self.message = THREAD_STATUS.into();
            }

            if empty && !self.help.is_visible() {
              self.set_transient_message(EMPTY_THREAD_MESSAGE.into());
            }
          }
          Err(error) => {
            if !self.help.is_visible() {
              self.set_transient_message(format!(
                "Could not load comments: {error}"
              ));
            }
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn like_selected(&mut self) {
    let Mode::Thread(view) = &self.mode else {
      return;
    };

    let Some(entry) = view.selected_entry() else {
      return;
    };

    let comment_id = entry.id.clone();
    let container_id = view.container_id().to_string();

    if self.session.user_id().is_none() {
      self.set_transient_message(
        "You must be signed in to like comments.".into(),
      );
      return;
    }

    self.pending_effects.push(Effect::ToggleLike {
      comment_id,
      container_id,
    });
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(
    base_url: String,
    posts: Vec<Post>,
    profile: Option<Profile>,
    session: Session,
  ) -> Self {
    let mut state = Self {
      base_url,
      composer: None,
      help: HelpView::new(),
      list_height: 0,
      message: POSTS_STATUS.into(),
      mode: Mode::Posts(ListView::new(posts)),
      next_request_id: 0,
      pending_delete: None,
      pending_effects: Vec::new(),
      pending_thread: None,
      posts: None,
      session,
      store: CommentStore::default(),
      transient_message: None,
    };

    if let Some(name) = profile.and_then(|profile| profile.name) {
      state.set_transient_message(format!("Signed in as {name}."));
    }

    state
  }

  fn open_in_browser(&mut self) {
    let url = match &self.mode {
      Mode::Posts(view) => view
        .selected_item()
        .map(|post| post.resolved_url(&self.base_url)),
      Mode::Thread(view) => {
        let container_id = view.container_id();

        Some(view.selected_entry().map_or_else(
          || format!("{}/posts/{container_id}", self.base_url),
          |entry| {
            format!(
              "{}/posts/{container_id}#comment-{}",
              self.base_url, entry.id
            )
          },
        ))
      }
    };

    if let Some(url) = url {
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn open_thread(&mut self) {
    let Mode::Posts(view) = &self.mode else {
      return;
    };

    let Some(post) = view.selected_item() else {
      return;
    };

    let container_id = post.id.clone();

    if self
      .pending_thread
      .as_ref()
      .is_some_and(|pending| pending.container_id == container_id)
    {
      return;
    }

    if !self.help.is_visible() {
      self.message = LOADING_COMMENTS_STATUS.into();
    }

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_thread = Some(PendingThread {
      container_id: container_id.clone(),
      request_id,
    });

    self.pending_effects.push(Effect::FetchThread {
      container_id,
      request_id,
    });
  }

  fn refresh_thread(&mut self, container_id: &str) {
    let Mode::Thread(view) = &mut self.mode else {
      return;
    };

    if view.container_id() != container_id {
      return;
    }

    let selected = view.selected_comment_id();
    let collapsed = view.collapsed_ids();
    let offset = view.offset;

    let comments = self.store.thread(container_id).to_vec();

    let mut next = ThreadView::new(
      container_id.to_string(),
      CommentNode::forest(comments),
      &self.session,
    );

    next.restore(selected.as_deref(), &collapsed, offset);

    *view = next;
  }

  fn request_delete(&mut self) {
    if self.composer.is_some() || self.pending_delete.is_some() {
      return;
    }

    let Mode::Thread(view) = &self.mode else {
      return;
    };

    let Some(entry) = view.selected_entry() else {
      return;
    };

    let editable = entry.editable;
    let comment_id = entry.id.clone();

    if !editable {
      self.set_transient_message(
        "You can only delete your own comments.".into(),
      );
      return;
    }

    self.pending_delete = Some(comment_id);

    if !self.help.is_visible() {
      self.message = CONFIRM_DELETE_STATUS.into();
    }
  }

  pub(crate) fn session(&self) -> &Session {
    &self.session
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn start_composer(&mut self, target: ComposerTarget, buffer: String) {
    let backup = self.message.clone();

    self.composer = Some(Composer::new(target, buffer, backup));

    self.update_composer_message();
  }

  fn submit_composer(&mut self) {
    let Some(composer) = self.composer.as_ref() else {
      return;
    };

    if composer.is_saving() {
      return;
    }

    let content = composer.buffer.trim().to_string();
    let target = composer.target.clone();

    if content.is_empty() {
      self.set_transient_message("A comment cannot be empty.".into());
      return;
    }

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    let effect = match target {
      ComposerTarget::Comment { container_id } => Effect::CreateComment {
        container_id,
        content,
        parent: None,
        request_id,
      },
      ComposerTarget::Edit { comment_id } => Effect::UpdateComment {
        comment_id,
        content,
        request_id,
      },
      ComposerTarget::Reply {
        container_id,
        parent_id,
      } => Effect::CreateComment {
        container_id,
        content,
        parent: Some(parent_id),
        request_id,
      },
    };

    if let Some(composer) = self.composer.as_mut() {
      composer.in_flight = Some(request_id);
    }

    self.pending_effects.push(effect);

    self.update_composer_message();
  }

  pub(crate) fn thread_title(&self, container_id: &str) -> Option<&str> {
    self
      .posts
      .as_ref()
      .and_then(|posts| {
        posts.items().iter().find(|post| post.id == container_id)
      })
      .map(|post| post.title.as_str())
  }

  fn update_composer_message(&mut self) {
    if let Some(composer) = &self.composer {
      let prompt = composer.prompt();
      self.message = truncate(&prompt, 120);
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::anyhow};

  fn make_comment(id: &str, parent: Option<&str>, author_id: &str) -> Comment {
    Comment {
      author_id: author_id.to_string(),
      author_name: format!("user {author_id}"),
      content: format!("comment {id}"),
      created: None,
      id: id.to_string(),
      liked: false,
      likes_count: 0,
      parent: parent.map(str::to_string),
      post: "3".to_string(),
      user_photo: None,
    }
  }

  fn sample_posts() -> Vec<Post> {
    vec![Post {
      author_name: Some("Ana".to_string()),
      comment_count: 2,
      created: None,
      id: "3".to_string(),
      title: "Weekly notices".to_string(),
      url: None,
    }]
  }

  fn sample_state(user_id: Option<&str>) -> State {
    let session = match user_id {
      Some(user_id) => Session::default().with_profile(&Profile {
        id: Some(user_id.to_string()),
        name: None,
      }),
      None => Session::default(),
    };

    State::new(
      "http://localhost:8000".to_string(),
      sample_posts(),
      None,
      session,
    )
  }

  fn open_thread(state: &mut State, comments: Vec<Comment>) {
    let dispatch = state.dispatch_command(Command::OpenThread);

    let request_id = match &dispatch.effects[0] {
      Effect::FetchThread { request_id, .. } => *request_id,
      _ => panic!("unexpected effect variant"),
    };

    state.handle_event(Event::Thread {
      request_id,
      result: Ok(comments),
    });
  }

  fn expanded_state() -> State {
    let mut state = sample_state(Some("7"));

    open_thread(
      &mut state,
      vec![
        make_comment("1", None, "7"),
        make_comment("2", Some("1"), "8"),
      ],
    );

    state
  }

  fn type_text(state: &mut State, text: &str) {
    for ch in text.chars() {
      state.composer_command(KeyEvent::new(
        KeyCode::Char(ch),
        KeyModifiers::NONE,
      ));
    }
  }

  fn thread_entries(state: &State) -> &[CommentEntry] {
    match state.mode() {
      Mode::Thread(view) => &view.entries,
      Mode::Posts(_) => panic!("expected thread mode"),
    }
  }

  #[test]
  fn open_thread_emits_fetch_effect() {
    let mut state = sample_state(Some("7"));

    let dispatch = state.dispatch_command(Command::OpenThread);

    assert!(!dispatch.should_exit);
    assert_eq!(dispatch.effects.len(), 1);

    match &dispatch.effects[0] {
      Effect::FetchThread { container_id, .. } => {
        assert_eq!(container_id, "3");
      }
      _ => panic!("unexpected effect variant"),
    }

    assert_eq!(state.message(), LOADING_COMMENTS_STATUS);
  }

  #[test]
  fn thread_response_expands_with_built_tree() {
    let state = expanded_state();

    let entries = thread_entries(&state);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "1");
    assert_eq!(entries[0].depth, 0);
    assert_eq!(entries[1].id, "2");
    assert_eq!(entries[1].depth, 1);
  }

  #[test]
  fn empty_thread_shows_transient_empty_message() {
    let mut state = sample_state(Some("7"));

    open_thread(&mut state, Vec::new());

    assert!(thread_entries(&state).is_empty());
    assert_eq!(state.message(), EMPTY_THREAD_MESSAGE);
  }

  #[test]
  fn failed_thread_load_stays_collapsed() {
    let mut state = sample_state(Some("7"));

    let dispatch = state.dispatch_command(Command::OpenThread);

    let request_id = match &dispatch.effects[0] {
      Effect::FetchThread { request_id, .. } => *request_id,
      _ => panic!("unexpected effect variant"),
    };

    state.handle_event(Event::Thread {
      request_id,
      result: Err(anyhow!("connection refused")),
    });

    assert!(matches!(state.mode(), Mode::Posts(_)));
    assert!(state.message().starts_with("Could not load comments"));
  }

  #[test]
  fn stale_thread_responses_are_dropped() {
    let mut state = sample_state(Some("7"));

    state.dispatch_command(Command::OpenThread);

    state.handle_event(Event::Thread {
      request_id: 999,
      result: Ok(vec![make_comment("1", None, "7")]),
    });

    assert!(matches!(state.mode(), Mode::Posts(_)));
  }

  #[test]
  fn empty_comment_submission_never_issues_a_request() {
    let mut state = expanded_state();

    state.dispatch_command(Command::ComposeComment);
    type_text(&mut state, "   ");

    let dispatch = state.dispatch_command(Command::SubmitComposer);

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.message(), "A comment cannot be empty.");
  }

  #[test]
  fn create_flow_appends_comment_and_closes_composer() {
    let mut state = expanded_state();

    state.dispatch_command(Command::ComposeComment);
    type_text(&mut state, "hello there");

    let dispatch = state.dispatch_command(Command::SubmitComposer);

    let request_id = match &dispatch.effects[0] {
      Effect::CreateComment {
        container_id,
        content,
        parent,
        request_id,
      } => {
        assert_eq!(container_id, "3");
        assert_eq!(content, "hello there");
        assert_eq!(*parent, None);
        *request_id
      }
      _ => panic!("unexpected effect variant"),
    };

    let mut created = make_comment("9", None, "7");
    created.content = "hello there".to_string();

    state.handle_event(Event::CommentCreated {
      request_id,
      result: Ok(created),
    });

    let entries = thread_entries(&state);
    assert!(entries.iter().any(|entry| entry.id == "9"));

    assert_eq!(state.message(), "Comment posted.");

    let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    assert!(state.composer_command(key).is_none(), "composer should close");
  }

  #[test]
  fn create_failure_keeps_the_draft() {
    let mut state = expanded_state();

    state.dispatch_command(Command::ComposeComment);
    type_text(&mut state, "my draft");

    let dispatch = state.dispatch_command(Command::SubmitComposer);

    let request_id = match &dispatch.effects[0] {
      Effect::CreateComment { request_id, .. } => *request_id,
      _ => panic!("unexpected effect variant"),
    };

    state.handle_event(Event::CommentCreated {
      request_id,
      result: Err(anyhow!("connection reset")),
    });

    assert!(state.message().starts_with("Could not post comment"));

    let key = KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE);
    assert!(
      state.composer_command(key).is_some(),
      "composer should stay open with the draft"
    );
  }

  #[test]
  fn reply_effect_carries_the_parent_id() {
    let mut state = expanded_state();

    state.dispatch_command(Command::ComposeReply);
    type_text(&mut state, "a reply");

    let dispatch = state.dispatch_command(Command::SubmitComposer);

    match &dispatch.effects[0] {
      Effect::CreateComment { parent, .. } => {
        assert_eq!(parent.as_deref(), Some("1"));
      }
      _ => panic!("unexpected effect variant"),
    }
  }

  #[test]
  fn editing_someone_elses_comment_is_rejected() {
    let mut state = expanded_state();

    if let Mode::Thread(view) = state.mode_mut() {
      view.select_next();
    }

    let dispatch = state.dispatch_command(Command::EditComment);

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.message(), "You can only edit your own comments.");

    let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    assert!(state.composer_command(key).is_none());
  }

  #[test]
  fn edit_save_blocks_resubmission_while_in_flight() {
    let mut state = expanded_state();

    state.dispatch_command(Command::EditComment);
    type_text(&mut state, " revised");

    let dispatch = state.dispatch_command(Command::SubmitComposer);
    assert_eq!(dispatch.effects.len(), 1);

    let again = state.dispatch_command(Command::SubmitComposer);
    assert!(again.effects.is_empty());
  }

  #[test]
  fn edit_rejection_shows_authorization_message_and_keeps_content() {
    let mut state = expanded_state();

    state.dispatch_command(Command::EditComment);
    type_text(&mut state, " revised");

    let dispatch = state.dispatch_command(Command::SubmitComposer);

    let request_id = match &dispatch.effects[0] {
      Effect::UpdateComment { request_id, .. } => *request_id,
      _ => panic!("unexpected effect variant"),
    };

    state.handle_event(Event::CommentUpdated {
      request_id,
      result: Err(ApiError::NotAuthorized.into()),
    });

    assert_eq!(
      state.message(),
      "You are not authorized to edit this comment."
    );

    assert_eq!(thread_entries(&state)[0].content, "comment 1");

    let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    assert!(state.composer_command(key).is_some());
  }

  #[test]
  fn edit_success_patches_content_in_place() {
    let mut state = expanded_state();

    state.dispatch_command(Command::EditComment);
    type_text(&mut state, " revised");

    let dispatch = state.dispatch_command(Command::SubmitComposer);

    let request_id = match &dispatch.effects[0] {
      Effect::UpdateComment { request_id, .. } => *request_id,
      _ => panic!("unexpected effect variant"),
    };

    let mut updated = make_comment("1", None, "7");
    updated.content = "comment 1 revised".to_string();

    state.handle_event(Event::CommentUpdated {
      request_id,
      result: Ok(updated),
    });

    assert_eq!(thread_entries(&state)[0].content, "comment 1 revised");
    assert_eq!(state.message(), "Comment updated.");
  }

  #[test]
  fn delete_requires_explicit_confirmation() {
    let mut state = expanded_state();

    let dispatch = state.dispatch_command(Command::DeleteComment);

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.message(), CONFIRM_DELETE_STATUS);

    let dispatch = state.dispatch_command(Command::ConfirmDelete);

    match &dispatch.effects[0] {
      Effect::DeleteComment {
        comment_id,
        container_id,
      } => {
        assert_eq!(comment_id, "1");
        assert_eq!(container_id, "3");
      }
      _ => panic!("unexpected effect variant"),
    }
  }

  #[test]
  fn cancelled_delete_sends_nothing() {
    let mut state = expanded_state();

    state.dispatch_command(Command::DeleteComment);

    let dispatch = state.dispatch_command(Command::CancelDelete);

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.message(), THREAD_STATUS);
  }

  #[test]
  fn deletion_promotes_replies_to_the_removed_parent() {
    let mut state = expanded_state();

    state.handle_event(Event::CommentDeleted {
      comment_id: "1".to_string(),
      container_id: "3".to_string(),
      result: Ok(()),
    });

    let entries = thread_entries(&state);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "2");
    assert_eq!(entries[0].depth, 0);
  }

  #[test]
  fn deleting_someone_elses_comment_is_rejected() {
    let mut state = expanded_state();

    if let Mode::Thread(view) = state.mode_mut() {
      view.select_next();
    }

    let dispatch = state.dispatch_command(Command::DeleteComment);

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.message(), "You can only delete your own comments.");
  }

  #[test]
  fn liking_requires_a_signed_in_session() {
    let mut state = sample_state(None);

    open_thread(&mut state, vec![make_comment("1", None, "7")]);

    let dispatch = state.dispatch_command(Command::LikeComment);

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.message(), "You must be signed in to like comments.");
  }

  #[test]
  fn like_responses_are_applied_verbatim_and_reversible() {
    let mut state = expanded_state();

    let dispatch = state.dispatch_command(Command::LikeComment);

    match &dispatch.effects[0] {
      Effect::ToggleLike { comment_id, .. } => assert_eq!(comment_id, "1"),
      _ => panic!("unexpected effect variant"),
    }

    state.handle_event(Event::CommentLiked {
      comment_id: "1".to_string(),
      container_id: "3".to_string(),
      result: Ok(LikeResponse {
        like_count: 5,
        liked: true,
      }),
    });

    assert_eq!(thread_entries(&state)[0].likes_count, 5);
    assert!(thread_entries(&state)[0].liked);

    state.handle_event(Event::CommentLiked {
      comment_id: "1".to_string(),
      container_id: "3".to_string(),
      result: Ok(LikeResponse {
        like_count: 4,
        liked: false,
      }),
    });

    assert_eq!(thread_entries(&state)[0].likes_count, 4);
    assert!(!thread_entries(&state)[0].liked);
  }

  #[test]
  fn closing_a_thread_returns_to_the_post_list() {
    let mut state = expanded_state();

    state.dispatch_command(Command::CloseThread);

    assert!(matches!(state.mode(), Mode::Posts(_)));
    assert_eq!(state.message(), POSTS_STATUS);

    // Reopening goes through a fresh fetch rather than any cached view.
    let dispatch = state.dispatch_command(Command::OpenThread);
    assert!(matches!(dispatch.effects[0], Effect::FetchThread { .. }));
  }
}
