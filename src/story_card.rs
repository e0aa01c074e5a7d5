use super::*;

pub(crate) const CARD_HEIGHT: u16 = 3;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Link {
  pub(crate) href: String,
  pub(crate) text: String,
}

/// The rendered form of one story: its title link, score annotation and the
/// two vote controls, in that order on screen.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StoryCard {
  pub(crate) controls: [VoteControl; 2],
  pub(crate) link: Link,
  pub(crate) score: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct VoteControl {
  pub(crate) id: ControlId,
}

impl StoryCard {
  /// Screen regions of this card when its first line starts at `origin`.
  pub(crate) fn click_targets(
    &self,
    origin: Position,
    width: u16,
  ) -> Vec<(Rect, ClickTarget)> {
    let indent = Span::raw(BASE_INDENT).width();

    let mut targets = Vec::with_capacity(3);

    let link_width = Span::raw(self.link.text.as_str()).width();

    targets.push((
      Rect::new(
        origin.x.saturating_add(to_u16(indent)),
        origin.y,
        to_u16(link_width),
        1,
      ),
      ClickTarget::Link {
        url: self.link.href.clone(),
      },
    ));

    let mut x = indent + Span::raw(self.score.as_str()).width();

    for control in &self.controls {
      x += 1;

      let control_width = Span::raw(control.label()).width();

      targets.push((
        Rect::new(
          origin.x.saturating_add(to_u16(x)),
          origin.y.saturating_add(1),
          to_u16(control_width),
          1,
        ),
        ClickTarget::Vote(control.id),
      ));

      x += control_width;
    }

    let right = origin.x.saturating_add(width);

    targets
      .into_iter()
      .filter(|(rect, _)| rect.x < right)
      .map(|(mut rect, target)| {
        rect.width = rect.width.min(right - rect.x);
        (rect, target)
      })
      .collect()
  }

  pub(crate) fn from_story(story: &Story) -> Self {
    Self {
      controls: [
        VoteControl {
          id: ControlId::new(story.id, Direction::Up),
        },
        VoteControl {
          id: ControlId::new(story.id, Direction::Down),
        },
      ],
      link: Link {
        href: story.url.clone(),
        text: format!("{} ", story.title),
      },
      score: format_points(story.score),
    }
  }

  pub(crate) fn lines(&self) -> Vec<Line<'static>> {
    let mut detail = vec![
      Span::raw(BASE_INDENT),
      Span::styled(self.score.clone(), Style::default().fg(Color::DarkGray)),
    ];

    for control in &self.controls {
      let color = match control.id.direction {
        Direction::Down => Color::Red,
        Direction::Up => Color::Green,
      };

      detail.push(Span::raw(" "));
      detail.push(Span::styled(control.label(), Style::default().fg(color)));
    }

    vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          self.link.text.clone(),
          Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED),
        ),
      ]),
      Line::from(detail),
      Line::from(Span::raw(BASE_INDENT)),
    ]
  }

  pub(crate) fn story_id(&self) -> u64 {
    self.controls[0].id.story_id
  }
}

impl Display for StoryCard {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}{}", self.link.text, self.score)?;

    for control in &self.controls {
      write!(f, " [{}]", control.id)?;
    }

    write!(f, "\n  {}", self.link.href)
  }
}

impl VoteControl {
  pub(crate) fn label(&self) -> String {
    format!("[{}]", self.id.direction.glyph())
  }
}

/// Appends one card per story to `container`, in the order given. Existing
/// contents are kept.
pub(crate) fn render_stories(container: &mut Container<StoryCard>, stories: &[Story]) {
  container.append(stories.iter().map(StoryCard::from_story));
}

fn to_u16(value: usize) -> u16 {
  u16::try_from(value).unwrap_or(u16::MAX)
}
