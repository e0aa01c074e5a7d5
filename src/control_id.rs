use super::*;

/// Identifies one vote control on the page: the story it belongs to and the
/// direction it votes in. Renders as `{story_id}-{direction}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ControlId {
  pub(crate) direction: Direction,
  pub(crate) story_id: u64,
}

impl ControlId {
  pub(crate) fn new(story_id: u64, direction: Direction) -> Self {
    Self {
      direction,
      story_id,
    }
  }

  pub(crate) fn vote(self) -> Vote {
    Vote {
      direction: self.direction,
      story_id: self.story_id,
    }
  }
}

impl Display for ControlId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}-{}", self.story_id, self.direction)
  }
}

impl FromStr for ControlId {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    let (id, direction) = s
      .split_once('-')
      .ok_or_else(|| anyhow!("control `{s}` is not of the form ID-DIRECTION"))?;

    let story_id = id
      .parse::<u64>()
      .with_context(|| format!("invalid story id `{id}` in control `{s}`"))?;

    Ok(Self::new(story_id, direction.parse()?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_story_id_and_direction() {
    assert_eq!(ControlId::new(1, Direction::Up).to_string(), "1-up");
    assert_eq!(ControlId::new(42, Direction::Down).to_string(), "42-down");
  }

  #[test]
  fn parse_recovers_rendered_pair() {
    for story_id in [0, 1, 42, u64::MAX] {
      for direction in [Direction::Up, Direction::Down] {
        let control = ControlId::new(story_id, direction);

        assert_eq!(control.to_string().parse::<ControlId>().unwrap(), control);
      }
    }
  }

  #[test]
  fn parse_rejects_malformed_identifiers() {
    for input in ["42", "42-", "-up", "x-up", "42-left", "42-up-down"] {
      assert!(input.parse::<ControlId>().is_err(), "{input} should fail");
    }
  }

  #[test]
  fn vote_carries_both_fields() {
    let vote = "42-down".parse::<ControlId>().unwrap().vote();

    assert_eq!(vote.story_id, 42);
    assert_eq!(vote.direction, Direction::Down);
  }
}
