use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct StoriesResponse {
  pub(crate) stories: Vec<Story>,
  pub(crate) total_stories: Option<usize>,
}
