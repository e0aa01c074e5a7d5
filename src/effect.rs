use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  FetchSearchResults { request_id: u64, tags: Vec<String> },
  FetchStories,
  OpenUrl { url: String },
  SubmitVote { vote: Vote },
}
