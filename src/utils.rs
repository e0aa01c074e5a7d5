use super::*;

pub(crate) fn deserialize_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;

  match value {
    Value::Null => Ok(0),
    Value::Number(n) => n
      .as_i64()
      .or_else(|| n.as_f64().map(score_from_float))
      .ok_or_else(|| de::Error::invalid_value(Unexpected::Other("number"), &"integer score")),
    Value::String(s) => s
      .trim()
      .parse::<i64>()
      .or_else(|_| s.trim().parse::<f64>().map(score_from_float))
      .map_err(|_| de::Error::invalid_value(Unexpected::Str(&s), &"numeric score")),
    Value::Bool(b) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Value::Array(_) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Value::Object(_) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

pub(crate) fn format_points(score: i64) -> String {
  format!("({score} points)")
}

#[allow(clippy::cast_possible_truncation)]
fn score_from_float(score: f64) -> i64 {
  score.round() as i64
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct ScoreWrapper {
    #[serde(deserialize_with = "deserialize_score")]
    value: i64,
  }

  fn parse_score(input: &str) -> Result<i64, serde_json::Error> {
    serde_json::from_str::<ScoreWrapper>(input).map(|wrapper| wrapper.value)
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn format_points_always_uses_plural_annotation() {
    assert_eq!(format_points(5), "(5 points)");
    assert_eq!(format_points(1), "(1 points)");
    assert_eq!(format_points(-3), "(-3 points)");
  }

  #[test]
  fn deserialize_score_supports_numbers_strings_and_null() {
    assert_eq!(parse_score(r#"{"value": 7}"#).unwrap(), 7);
    assert_eq!(parse_score(r#"{"value": -2}"#).unwrap(), -2);
    assert_eq!(parse_score(r#"{"value": "12"}"#).unwrap(), 12);
    assert_eq!(parse_score(r#"{"value": "3.0"}"#).unwrap(), 3);
    assert_eq!(parse_score(r#"{"value": null}"#).unwrap(), 0);

    assert!(
      parse_score(r#"{"value": true}"#).is_err(),
      "bools should fail deserialization"
    );

    assert!(parse_score(r#"{"value": "many"}"#).is_err());
  }
}
