use super::*;

pub(crate) enum Event {
  SearchResults {
    request_id: u64,
    result: Result<Vec<SearchHit>>,
  },
  Stories {
    result: Result<Vec<Story>>,
  },
  VoteSubmitted {
    result: Result,
    vote: Vote,
  },
}
