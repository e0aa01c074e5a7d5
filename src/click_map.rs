use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ClickTarget {
  Link { url: String },
  Vote(ControlId),
}

/// Clickable regions of the last drawn frame.
#[derive(Default)]
pub(crate) struct ClickMap {
  regions: Vec<(Rect, ClickTarget)>,
}

impl ClickMap {
  pub(crate) fn clear(&mut self) {
    self.regions.clear();
  }

  pub(crate) fn extend<I>(&mut self, regions: I)
  where
    I: IntoIterator<Item = (Rect, ClickTarget)>,
  {
    self.regions.extend(regions);
  }

  pub(crate) fn target_at(&self, column: u16, row: u16) -> Option<&ClickTarget> {
    let position = Position::new(column, row);

    self
      .regions
      .iter()
      .find(|(rect, _)| rect.contains(position))
      .map(|(_, target)| target)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finds_target_under_position() {
    let mut map = ClickMap::default();

    map.extend([
      (
        Rect::new(1, 1, 4, 1),
        ClickTarget::Link {
          url: "http://a".into(),
        },
      ),
      (
        Rect::new(12, 2, 3, 1),
        ClickTarget::Vote(ControlId::new(7, Direction::Up)),
      ),
    ]);

    assert_eq!(
      map.target_at(13, 2),
      Some(&ClickTarget::Vote(ControlId::new(7, Direction::Up)))
    );

    assert_eq!(
      map.target_at(4, 1),
      Some(&ClickTarget::Link {
        url: "http://a".into()
      })
    );

    assert_eq!(map.target_at(5, 1), None);
    assert_eq!(map.target_at(13, 3), None);
  }

  #[test]
  fn clear_forgets_previous_frame() {
    let mut map = ClickMap::default();

    map.extend([(
      Rect::new(0, 0, 10, 10),
      ClickTarget::Vote(ControlId::new(1, Direction::Down)),
    )]);

    map.clear();

    assert_eq!(map.target_at(1, 1), None);
  }
}
