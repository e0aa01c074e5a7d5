use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SearchHit {
  pub(crate) tag: String,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl<'de> Deserialize<'de> for SearchHit {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let (title, url, tag) = <(String, String, String)>::deserialize(deserializer)?;

    Ok(Self { tag, title, url })
  }
}

impl SearchHit {
  pub(crate) fn lines(&self) -> Vec<Line<'static>> {
    vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(self.title.clone(), Style::default().fg(Color::White)),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          format!("[{}] {}", self.tag, truncate(&self.url, 80)),
          Style::default().fg(Color::DarkGray),
        ),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_triples_in_title_url_tag_order() {
    let hits = serde_json::from_str::<Vec<SearchHit>>(
      r#"[["Title", "http://bbc.co.uk/news/1", "Politics"]]"#,
    )
    .unwrap();

    assert_eq!(
      hits,
      vec![SearchHit {
        tag: "Politics".into(),
        title: "Title".into(),
        url: "http://bbc.co.uk/news/1".into(),
      }]
    );
  }

  #[test]
  fn invalid_tag_body_does_not_decode() {
    assert!(serde_json::from_str::<Vec<SearchHit>>(r#"["Invalid tag."]"#).is_err());
  }
}
