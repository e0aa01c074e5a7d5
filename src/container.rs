/// The on-screen container cards are appended to. Keeps insertion order, a
/// cursor on the selected entry and the first visible entry.
pub(crate) struct Container<T> {
  cursor: usize,
  entries: Vec<T>,
  first_visible: usize,
}

impl<T> Default for Container<T> {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl<T> Container<T> {
  pub(crate) fn append<I>(&mut self, entries: I)
  where
    I: IntoIterator<Item = T>,
  {
    self.entries.extend(entries);
  }

  fn clamp(&self, index: usize) -> usize {
    index.min(self.entries.len().saturating_sub(1))
  }

  pub(crate) fn first_visible(&self) -> usize {
    self.first_visible.min(self.cursor)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.entries
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    self.select(self.cursor.saturating_add_signed(delta));
  }

  pub(crate) fn new(entries: Vec<T>) -> Self {
    Self {
      cursor: 0,
      entries,
      first_visible: 0,
    }
  }

  pub(crate) fn position<P>(&self, predicate: P) -> Option<usize>
  where
    P: FnMut(&T) -> bool,
  {
    self.entries.iter().position(predicate)
  }

  pub(crate) fn scroll_to(&mut self, first_visible: usize) {
    self.first_visible = self.clamp(first_visible);
  }

  pub(crate) fn select(&mut self, index: usize) {
    self.cursor = self.clamp(index);
  }

  pub(crate) fn selected(&self) -> Option<&T> {
    self.entries.get(self.cursor)
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    (!self.entries.is_empty()).then_some(self.cursor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_container_has_no_selection() {
    let container = Container::<u64>::default();

    assert_eq!(container.selected_index(), None);
    assert!(container.selected().is_none());
    assert_eq!(container.first_visible(), 0);
  }

  #[test]
  fn append_keeps_order_and_cursor() {
    let mut container = Container::new(vec!["a", "b"]);

    container.select(1);
    container.append(["c", "d"]);

    assert_eq!(container.items(), ["a", "b", "c", "d"]);
    assert_eq!(container.selected(), Some(&"b"));
  }

  #[test]
  fn cursor_and_scroll_stay_in_bounds() {
    let mut container = Container::new(vec![10, 20, 30]);

    container.select(usize::MAX);
    assert_eq!(container.selected(), Some(&30));

    container.move_by(-5);
    assert_eq!(container.selected(), Some(&10));

    container.move_by(1);
    assert_eq!(container.selected_index(), Some(1));

    container.scroll_to(10);
    assert_eq!(container.first_visible(), 1);
  }

  #[test]
  fn position_finds_first_match() {
    let container = Container::new(vec![4, 8, 8]);

    assert_eq!(container.position(|n| *n == 8), Some(1));
    assert_eq!(container.position(|n| *n == 5), None);
  }
}
