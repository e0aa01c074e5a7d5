use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Story {
  pub(crate) id: u64,
  #[serde(deserialize_with = "deserialize_score")]
  pub(crate) score: i64,
  pub(crate) title: String,
  pub(crate) url: String,
}
