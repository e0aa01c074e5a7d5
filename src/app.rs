use super::*;

pub(crate) struct App {
  click_map: ClickMap,
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(LayoutDirection::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let list_area = layout[1];

    self.state.set_list_height(list_area.height as usize);

    self.click_map.clear();

    let header = Line::from(vec![
      Span::styled(
        "NEWS",
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(
        self.client.base_url().to_string(),
        Style::default().fg(Color::DarkGray),
      ),
      Span::raw("  "),
      Span::styled(
        match self.state.mode() {
          Mode::Stories => format!("{} stories", self.state.stories().len()),
          Mode::Search(view) => format!("{} results", view.len()),
        },
        Style::default().fg(Color::DarkGray),
      ),
    ]);

    frame.render_widget(Paragraph::new(header), layout[0]);

    let phase = self.state.phase();

    let (list_items, selected_index, offset) = match self.state.mode() {
      Mode::Stories => {
        let view = self.state.stories();

        let list_items: Vec<ListItem> = if view.is_empty() {
          let text = if phase == Phase::Loading {
            LOADING_STATUS
          } else {
            "No stories."
          };

          vec![ListItem::new(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::raw(text),
          ]))]
        } else {
          view
            .items()
            .iter()
            .map(|card| ListItem::new(card.lines()))
            .collect()
        };

        (list_items, view.selected_index(), view.first_visible())
      }
      Mode::Search(view) => {
        let list_items: Vec<ListItem> = if view.is_empty() {
          vec![ListItem::new(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::raw("No results yet. Try other tags."),
          ]))]
        } else {
          view
            .items()
            .iter()
            .map(|hit| ListItem::new(hit.lines()))
            .collect()
        };

        (list_items, view.selected_index(), view.first_visible())
      }
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(Style::default().add_modifier(Modifier::BOLD))
      .highlight_symbol("");

    frame.render_stateful_widget(list, list_area, &mut list_state);

    let offset = list_state.offset();

    self.state.set_list_offset(offset);

    if matches!(self.state.mode(), Mode::Stories) {
      self.register_click_targets(list_area, offset);
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchStories => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Stories {
            result: client.fetch_stories().await,
          });
        });
      }
      Effect::SubmitVote { vote } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::VoteSubmitted {
            result: client.submit_vote(vote).await,
            vote,
          });
        });
      }
      Effect::FetchSearchResults { request_id, tags } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::SearchResults {
            request_id,
            result: client.search(&tags).await,
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
          warn!(%url, "could not open link: {error}");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn mouse_command(&self, mouse: MouseEvent) -> Command {
    if self.state.help_is_visible() || self.state.tag_prompt_is_open() {
      return Command::None;
    }

    match mouse.kind {
      MouseEventKind::Down(MouseButton::Left) => {
        match self.click_map.target_at(mouse.column, mouse.row) {
          Some(ClickTarget::Vote(control)) => Command::Vote(*control),
          Some(ClickTarget::Link { url }) => Command::OpenUrl(url.clone()),
          None => Command::None,
        }
      }
      MouseEventKind::ScrollDown => Command::SelectNext,
      MouseEventKind::ScrollUp => Command::SelectPrevious,
      _ => Command::None,
    }
  }

  pub(crate) fn new(client: Client, stories: &[Story]) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      click_map: ClickMap::default(),
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(stories),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  fn register_click_targets(&mut self, area: Rect, offset: usize) {
    let bottom = area.y.saturating_add(area.height);

    let mut y = area.y;

    for card in self.state.stories().items().iter().skip(offset) {
      if y.saturating_add(CARD_HEIGHT) > bottom {
        break;
      }

      self
        .click_map
        .extend(card.click_targets(Position::new(area.x, y), area.width));

      y += CARD_HEIGHT;
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

      let command = match crossterm_event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
          if self.state.help_is_visible() {
            HelpView::handle_key(key)
          } else if let Some(command) = self.state.search_input_command(key) {
            command
          } else {
            self.state.mode().handle_key(key)
          }
        }
        CrosstermEvent::Mouse(mouse) => self.mouse_command(mouse),
        _ => continue,
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    ratatui::{backend::TestBackend, buffer::Buffer},
  };

  fn app_with_stories(count: u64) -> App {
    let stories = (1..=count)
      .map(|id| Story {
        id,
        score: 0,
        title: format!("Story {id}"),
        url: format!("http://{id}"),
      })
      .collect::<Vec<_>>();

    App::new(
      Client::new("http://127.0.0.1:5000".parse().unwrap()).unwrap(),
      &stories,
    )
  }

  fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
      column,
      kind: MouseEventKind::Down(MouseButton::Left),
      modifiers: KeyModifiers::NONE,
      row,
    }
  }

  fn draw(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();

    terminal.draw(|frame| app.draw(frame)).unwrap();

    terminal.backend().buffer().clone()
  }

  fn glyph_cells(buffer: &Buffer) -> Vec<(u16, u16, Direction)> {
    let area = buffer.area;

    let mut cells = Vec::new();

    for y in area.top()..area.bottom() {
      for x in area.left()..area.right() {
        let direction = match buffer[(x, y)].symbol() {
          "⬆" => Direction::Up,
          "⬇" => Direction::Down,
          _ => continue,
        };

        cells.push((x, y, direction));
      }
    }

    cells
  }

  fn row_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;

    (area.left()..area.right())
      .map(|x| buffer[(x, y)].symbol())
      .collect()
  }

  #[tokio::test]
  async fn drawn_vote_glyphs_map_to_their_story() {
    let mut app = app_with_stories(10);

    app.state.dispatch_command(Command::SelectLast).unwrap();

    let buffer = draw(&mut app);

    let cells = glyph_cells(&buffer);

    assert!(!cells.is_empty());

    let mut voted = Vec::new();

    for (x, y, direction) in cells {
      let Some(ClickTarget::Vote(control)) = app.click_map.target_at(x, y)
      else {
        panic!("no vote control under ({x}, {y})");
      };

      assert_eq!(control.direction, direction);

      assert!(
        row_text(&buffer, y - 1).contains(&format!("Story {} ", control.story_id)),
        "control {control} is not below its title"
      );

      assert_eq!(app.mouse_command(click(x, y)), Command::Vote(*control));

      voted.push(control.story_id);
    }

    voted.dedup();

    assert_eq!(voted, [8, 9, 10]);
  }

  #[tokio::test]
  async fn drawn_titles_open_their_links() {
    let mut app = app_with_stories(2);

    let buffer = draw(&mut app);

    let (x, y) = (0..buffer.area.height)
      .find_map(|y| {
        row_text(&buffer, y)
          .find("Story 2 ")
          .map(|x| (u16::try_from(x).unwrap(), y))
      })
      .unwrap();

    assert_eq!(
      app.mouse_command(click(x, y)),
      Command::OpenUrl("http://2".into())
    );
  }

  #[tokio::test]
  async fn clicks_are_ignored_while_tag_prompt_is_open() {
    let mut app = app_with_stories(3);

    let buffer = draw(&mut app);

    let (x, y, _) = glyph_cells(&buffer)[0];

    app.state.dispatch_command(Command::StartSearch).unwrap();

    assert_eq!(app.mouse_command(click(x, y)), Command::None);

    app.state.dispatch_command(Command::CancelSearch).unwrap();

    assert!(matches!(app.mouse_command(click(x, y)), Command::Vote(_)));
  }

  #[tokio::test]
  async fn clicks_are_ignored_while_help_is_open() {
    let mut app = app_with_stories(3);

    let buffer = draw(&mut app);

    let (x, y, _) = glyph_cells(&buffer)[0];

    app.state.dispatch_command(Command::ShowHelp).unwrap();

    assert_eq!(app.mouse_command(click(x, y)), Command::None);
  }
}
