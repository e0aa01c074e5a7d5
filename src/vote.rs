use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Vote {
  pub(crate) direction: Direction,
  pub(crate) story_id: u64,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct VoteRequest {
  pub(crate) direction: Direction,
}

impl Vote {
  pub(crate) fn path(self) -> String {
    format!("stories/{}/votes", self.story_id)
  }

  pub(crate) fn request(self) -> VoteRequest {
    VoteRequest {
      direction: self.direction,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_body_only_carries_direction() {
    let vote = Vote {
      direction: Direction::Down,
      story_id: 42,
    };

    assert_eq!(vote.path(), "stories/42/votes");

    assert_eq!(
      serde_json::to_string(&vote.request()).unwrap(),
      r#"{"direction":"down"}"#
    );
  }
}
