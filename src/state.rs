use super::*;

struct PendingSearch {
  query: String,
  request_id: u64,
}

pub(crate) struct State {
  help: HelpView,
  list_height: usize,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_search: Option<PendingSearch>,
  phase: Phase,
  reselect: Option<u64>,
  stories: Container<StoryCard>,
  status: StatusLine,
  tag_input: Option<TagInput>,
}

impl State {
  fn cancel_search(&mut self) {
    if let Some(input) = self.tag_input.take() {
      self.status.set(input.replaced_status);
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn close_search(&mut self) {
    self.pending_search = None;
    self.mode = Mode::Stories;

    self.set_status(LIST_STATUS);
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.status),
      Command::HideHelp => self.help.hide(&mut self.status),
      Command::StartSearch => self.start_search(),
      Command::CancelSearch => self.cancel_search(),
      Command::SubmitSearch => self.submit_search(),
      Command::CloseSearch => self.close_search(),
      Command::SelectNext => self.move_selection(1),
      Command::SelectPrevious => self.move_selection(-1),
      Command::PageDown => self.move_selection(self.page_jump()),
      Command::PageUp => self.move_selection(-self.page_jump()),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_index(usize::MAX),
      Command::OpenSelected => self.open_selected(),
      Command::OpenUrl(url) => self.pending_effects.push(Effect::OpenUrl { url }),
      Command::Reload => self.reload(),
      Command::Vote(control) => self.vote(control)?,
      Command::VoteSelected(direction) => self.vote_selected(direction)?,
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Stories { result } => {
        self.phase = Phase::Idle;

        let reselect = self.reselect.take();

        match result {
          Ok(stories) => {
            info!(count = stories.len(), "rendering stories");

            render_stories(&mut self.stories, &stories);

            if let Some(story_id) = reselect
              && let Some(index) =
                self.stories.position(|card| card.story_id() == story_id)
            {
              self.stories.select(index);
            }
          }
          Err(error) => {
            warn!("could not load stories: {error:#}");
          }
        }

        if matches!(self.mode, Mode::Stories) {
          self.set_status(LIST_STATUS);
        }
      }
      Event::VoteSubmitted { result, vote } => match result {
        Ok(()) => {
          info!(story_id = vote.story_id, direction = %vote.direction, "vote accepted, reloading");
          self.phase = Phase::Idle;
          self.reload();
        }
        Err(error) => {
          warn!(
            story_id = vote.story_id,
            direction = %vote.direction,
            "vote failed: {error:#}"
          );

          self.phase = Phase::Idle;

          if matches!(self.mode, Mode::Stories) {
            self.set_status(LIST_STATUS);
          }
        }
      },
      Event::SearchResults { request_id, result } => {
        let Some(pending) = self.pending_search.as_ref() else {
          return;
        };

        if pending.request_id != request_id {
          return;
        }

        let Some(pending) = self.pending_search.take() else {
          return;
        };

        match result {
          Ok(hits) => {
            let result_count = hits.len();

            self.mode = Mode::Search(Container::new(hits));

            let truncated = truncate(&pending.query, 40);

            self.set_status(match result_count {
              0 => format!("No stories tagged \"{truncated}\""),
              1 => format!("Found 1 story tagged \"{truncated}\""),
              _ => format!(
                "Found {result_count} stories tagged \"{truncated}\""
              ),
            });
          }
          Err(error) => {
            if !self.help.is_visible() {
              self.status.flash(format!("Could not search: {error}"));
            }
          }
        }
      }
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> Command {
    if self.tag_input.is_none() {
      return Command::None;
    }

    match key.code {
      KeyCode::Esc => Command::CancelSearch,
      KeyCode::Enter => Command::SubmitSearch,
      KeyCode::Backspace => {
        if let Some(input) = self.tag_input.as_mut() {
          input.pop();
        }

        self.update_search_message();

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        if let Some(input) = self.tag_input.as_mut() {
          input.push(ch);
        }

        self.update_search_message();

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn message(&self) -> &str {
    self.status.text()
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  fn move_selection(&mut self, delta: isize) {
    match &mut self.mode {
      Mode::Stories => self.stories.move_by(delta),
      Mode::Search(view) => view.move_by(delta),
    }
  }

  pub(crate) fn new(stories: &[Story]) -> Self {
    let mut state = Self {
      help: HelpView::new(),
      list_height: 0,
      mode: Mode::Stories,
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_search: None,
      phase: Phase::Idle,
      reselect: None,
      stories: Container::default(),
      status: StatusLine::new(LIST_STATUS),
      tag_input: None,
    };

    render_stories(&mut state.stories, stories);

    state
  }

  fn open_selected(&mut self) {
    let url = match &self.mode {
      Mode::Stories => self.stories.selected().map(|card| card.link.href.clone()),
      Mode::Search(view) => view.selected().map(|hit| hit.url.clone()),
    };

    if let Some(url) = url.filter(|url| !url.is_empty()) {
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn page_jump(&self) -> isize {
    let cards = self.list_height / usize::from(CARD_HEIGHT);

    isize::try_from(cards.saturating_sub(1).max(1)).unwrap_or(1)
  }

  pub(crate) fn phase(&self) -> Phase {
    self.phase
  }

  /// Throws the current page away and fetches it again from scratch.
  fn reload(&mut self) {
    if self.phase != Phase::Idle {
      debug!(phase = ?self.phase, "reload ignored while busy");
      return;
    }

    self.reselect = self.stories.selected().map(StoryCard::story_id);
    self.stories = Container::default();
    self.phase = Phase::Loading;

    if matches!(self.mode, Mode::Stories) {
      self.set_status(LOADING_STATUS);
    }

    self.pending_effects.push(Effect::FetchStories);
  }

  pub(crate) fn search_input_command(
    &mut self,
    key: KeyEvent,
  ) -> Option<Command> {
    if self.tag_input.is_some() {
      Some(self.handle_search_key(key))
    } else {
      None
    }
  }

  fn select_index(&mut self, index: usize) {
    match &mut self.mode {
      Mode::Stories => self.stories.select(index),
      Mode::Search(view) => view.select(index),
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_list_offset(&mut self, offset: usize) {
    match &mut self.mode {
      Mode::Stories => self.stories.scroll_to(offset),
      Mode::Search(view) => view.scroll_to(offset),
    }
  }

  /// Sets the status line, or, while the help overlay or tag prompt covers
  /// it, the text shown once they close.
  fn set_status(&mut self, text: impl Into<String>) {
    let text = text.into();

    if let Some(input) = self.tag_input.as_mut() {
      input.replaced_status = text;
    } else if self.help.is_visible() {
      self.help.set_replaced_status(text);
    } else {
      self.status.set(text);
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    self.status.flash(message);
  }

  fn start_search(&mut self) {
    if self.tag_input.is_some() {
      return;
    }

    self.tag_input = Some(TagInput::new(self.status.text().to_string()));

    self.update_search_message();
  }

  pub(crate) fn stories(&self) -> &Container<StoryCard> {
    &self.stories
  }

  fn submit_search(&mut self) {
    let Some(input) = self.tag_input.take() else {
      return;
    };

    let tags = input.tags();

    if tags.is_empty() {
      self.status.set(input.replaced_status);
      return;
    }

    let query = tags.join(", ");

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_search = Some(PendingSearch {
      query: query.clone(),
      request_id,
    });

    self.mode = Mode::Search(Container::default());

    self
      .status
      .set(format!("Searching for \"{}\"...", truncate(&query, 40)));

    self
      .pending_effects
      .push(Effect::FetchSearchResults { request_id, tags });
  }

  pub(crate) fn tag_prompt_is_open(&self) -> bool {
    self.tag_input.is_some()
  }

  fn update_search_message(&mut self) {
    if let Some(input) = &self.tag_input {
      self.status.set(truncate(&input.prompt(), 80));
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    self.status.tick();
  }

  fn vote(&mut self, control: ControlId) -> Result {
    if self.phase != Phase::Idle {
      debug!(%control, phase = ?self.phase, "vote ignored while busy");
      return Ok(());
    }

    if !self
      .stories
      .items()
      .iter()
      .any(|card| card.story_id() == control.story_id)
    {
      bail!("no story with id {} on this page", control.story_id);
    }

    self.phase = Phase::Voting;

    self.set_status(VOTING_STATUS);

    self.pending_effects.push(Effect::SubmitVote {
      vote: control.vote(),
    });

    Ok(())
  }

  fn vote_selected(&mut self, direction: Direction) -> Result {
    if !matches!(self.mode, Mode::Stories) {
      return Ok(());
    }

    let Some(card) = self.stories.selected() else {
      return Ok(());
    };

    let control = card
      .controls
      .iter()
      .find(|control| control.id.direction == direction)
      .map(|control| control.id)
      .ok_or_else(|| anyhow!("story has no {direction} control"))?;

    self.vote(control)
  }
}
