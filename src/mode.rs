use super::*;

pub(crate) enum Mode {
  Search(Container<SearchHit>),
  Stories,
}

impl Mode {
  pub(crate) fn handle_key(&self, key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    let command = match key.code {
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
      KeyCode::PageDown => Command::PageDown,
      KeyCode::PageUp => Command::PageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageUp
      }
      KeyCode::Home => Command::SelectFirst,
      KeyCode::End => Command::SelectLast,
      KeyCode::Enter | KeyCode::Char('o' | 'O') => Command::OpenSelected,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    };

    if command != Command::None {
      return command;
    }

    match self {
      Mode::Stories => match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('u' | '+') => Command::VoteSelected(Direction::Up),
        KeyCode::Char('d' | '-') => Command::VoteSelected(Direction::Down),
        KeyCode::Char('r' | 'R') => Command::Reload,
        KeyCode::Char('/') => Command::StartSearch,
        _ => Command::None,
      },
      Mode::Search(_) => match key.code {
        KeyCode::Esc => Command::CloseSearch,
        _ => Command::None,
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn vote_keys_map_to_directions_in_story_list() {
    let mode = Mode::Stories;

    assert_eq!(
      mode.handle_key(press(KeyCode::Char('u'))),
      Command::VoteSelected(Direction::Up)
    );

    assert_eq!(
      mode.handle_key(press(KeyCode::Char('-'))),
      Command::VoteSelected(Direction::Down)
    );
  }

  #[test]
  fn ctrl_d_pages_instead_of_voting() {
    let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);

    assert_eq!(Mode::Stories.handle_key(key), Command::PageDown);
  }

  #[test]
  fn search_results_do_not_vote_and_escape_returns() {
    let mode = Mode::Search(Container::default());

    assert_eq!(mode.handle_key(press(KeyCode::Char('u'))), Command::None);
    assert_eq!(mode.handle_key(press(KeyCode::Esc)), Command::CloseSearch);
    assert_eq!(Mode::Stories.handle_key(press(KeyCode::Esc)), Command::Quit);
  }
}
