use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
  CancelSearch,
  CloseSearch,
  HideHelp,
  None,
  OpenSelected,
  OpenUrl(String),
  PageDown,
  PageUp,
  Quit,
  Reload,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartSearch,
  SubmitSearch,
  Vote(ControlId),
  VoteSelected(Direction),
}
