use super::*;

/// Text shown under the story list. A flashed message replaces the text for
/// a few seconds and then the previous text comes back, unless something
/// else was set in the meantime.
pub(crate) struct StatusLine {
  flash: Option<Flash>,
  text: String,
}

struct Flash {
  expires_at: Instant,
  restore: String,
}

impl StatusLine {
  const FLASH_TTL: Duration = Duration::from_secs(3);

  pub(crate) fn flash(&mut self, text: String) {
    self.flash_for(text, Self::FLASH_TTL);
  }

  fn flash_for(&mut self, text: String, ttl: Duration) {
    let previous = std::mem::replace(&mut self.text, text);

    let restore = self.flash.take().map_or(previous, |flash| flash.restore);

    self.flash = Some(Flash {
      expires_at: Instant::now() + ttl,
      restore,
    });
  }

  pub(crate) fn new(text: &str) -> Self {
    Self {
      flash: None,
      text: text.into(),
    }
  }

  pub(crate) fn set(&mut self, text: impl Into<String>) {
    self.flash = None;
    self.text = text.into();
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }

  pub(crate) fn tick(&mut self) {
    if self
      .flash
      .as_ref()
      .is_some_and(|flash| Instant::now() >= flash.expires_at)
      && let Some(flash) = self.flash.take()
    {
      self.text = flash.restore;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flash_stays_until_it_expires() {
    let mut status = StatusLine::new("idle");

    status.flash("Opened in browser".into());
    status.tick();

    assert_eq!(status.text(), "Opened in browser");
  }

  #[test]
  fn expired_flash_restores_previous_text() {
    let mut status = StatusLine::new("idle");

    status.flash_for("first".into(), Duration::ZERO);
    status.flash_for("second".into(), Duration::ZERO);
    status.tick();

    assert_eq!(status.text(), "idle");
  }

  #[test]
  fn set_cancels_pending_flash() {
    let mut status = StatusLine::new("idle");

    status.flash_for("oops".into(), Duration::ZERO);
    status.set("loading");
    status.tick();

    assert_eq!(status.text(), "loading");
  }
}
