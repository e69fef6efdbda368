use super::*;

/// Display strings from the forum are usually JSON strings, but a bare number
/// (an id used as a name, a numeric date) renders just as well.
pub(crate) fn deserialize_display_string<'de, D>(
  deserializer: D,
) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(s),
    Value::Number(n) => Ok(n.to_string()),
    Value::Null => Err(de::Error::invalid_type(
      Unexpected::Unit,
      &"string or number",
    )),
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

/// Centers a box big enough for `text` plus borders inside `area`.
pub(crate) fn popup_area(area: Rect, text: &str) -> Rect {
  fn saturating_usize_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
  }

  let (line_count, max_line_width) =
    text
      .lines()
      .fold((0usize, 0usize), |(count, width), line| {
        let updated_count = count.saturating_add(1);
        let line_width = line.chars().count();

        (updated_count, width.max(line_width))
      });

  let desired_width =
    saturating_usize_to_u16(max_line_width.saturating_add(4)).max(1);

  let desired_height =
    saturating_usize_to_u16(line_count.saturating_add(2)).max(1);

  let available_width = area.width.saturating_sub(2).max(1);
  let available_height = area.height.saturating_sub(2).max(1);

  let width = available_width.clamp(1, desired_width).min(area.width);
  let height = available_height.clamp(1, desired_height).min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
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

/// Word-wraps each line of `text` to `width`, keeping the author's line
/// breaks. Blank lines survive as empty strings.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();

  for paragraph in text.lines() {
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
      let word_width = word.chars().count();

      if current.is_empty() {
        current.push_str(word);
        current_width = word_width;
      } else if current_width + 1 + word_width <= width {
        current.push(' ');
        current.push_str(word);
        current_width += 1 + word_width;
      } else {
        lines.push(current);
        current = word.to_string();
        current_width = word_width;
      }
    }

    lines.push(current);
  }

  lines
}
