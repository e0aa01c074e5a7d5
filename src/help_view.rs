use super::*;

/// The `?` overlay. While it is open the status line shows how to close it;
/// the replaced status is kept here.
pub(crate) struct HelpView {
  replaced_status: Option<String>,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.is_visible() {
      return;
    }

    let area = Self::overlay_area(frame.area());

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(HELP_TEXT).block(
        Block::default()
          .title(HELP_TITLE)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(Color::Cyan)),
      ),
      area,
    );
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self, status: &mut StatusLine) {
    if let Some(replaced) = self.replaced_status.take() {
      status.set(replaced);
    }
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.replaced_status.is_some()
  }

  pub(crate) fn new() -> Self {
    Self {
      replaced_status: None,
    }
  }

  fn overlay_area(area: Rect) -> Rect {
    let lines = HELP_TEXT.lines();

    let text_width = lines
      .clone()
      .map(|line| Span::raw(line).width())
      .max()
      .unwrap_or(0);

    let width = u16::try_from(text_width + 2)
      .unwrap_or(u16::MAX)
      .min(area.width.saturating_sub(2))
      .max(1);

    let height = u16::try_from(lines.count() + 2)
      .unwrap_or(u16::MAX)
      .min(area.height.saturating_sub(2))
      .max(1);

    area.clamp(Rect::new(
      area.x + area.width.saturating_sub(width) / 2,
      area.y + area.height.saturating_sub(height) / 2,
      width,
      height,
    ))
  }

  /// Changes what `hide` will restore, if the overlay is open.
  pub(crate) fn set_replaced_status(&mut self, text: String) {
    if let Some(replaced) = self.replaced_status.as_mut() {
      *replaced = text;
    }
  }

  pub(crate) fn show(&mut self, status: &mut StatusLine) {
    if self.is_visible() {
      return;
    }

    self.replaced_status = Some(status.text().to_string());

    status.set(HELP_STATUS);
  }
}
