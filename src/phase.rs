/// Where the page is in its load/vote cycle. Votes are only accepted while
/// idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
  Idle,
  Loading,
  Voting,
}
