/// The `/` prompt: a comma separated list of tags being typed in the status
/// line, plus the status it temporarily replaces.
pub(crate) struct TagInput {
  buffer: String,
  pub(crate) replaced_status: String,
}

impl TagInput {
  pub(crate) fn new(replaced_status: String) -> Self {
    Self {
      buffer: String::new(),
      replaced_status,
    }
  }

  pub(crate) fn pop(&mut self) {
    self.buffer.pop();
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Search tags: {}", self.buffer)
  }

  pub(crate) fn push(&mut self, ch: char) {
    self.buffer.push(ch);
  }

  pub(crate) fn tags(&self) -> Vec<String> {
    self
      .buffer
      .split(',')
      .map(str::trim)
      .filter(|tag| !tag.is_empty())
      .map(str::to_string)
      .collect()
  }
}
