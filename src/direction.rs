use super::*;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Direction {
  Down,
  Up,
}

impl Direction {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::Down => "down",
      Self::Up => "up",
    }
  }

  pub(crate) fn glyph(self) -> &'static str {
    match self {
      Self::Down => "⬇",
      Self::Up => "⬆",
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Direction {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "down" => Ok(Self::Down),
      "up" => Ok(Self::Up),
      _ => Err(anyhow!("unknown vote direction `{s}`")),
    }
  }
}
