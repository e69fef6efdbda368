use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Comment {
  #[serde(rename = "usuario", deserialize_with = "deserialize_display_string")]
  pub(crate) author: String,
  #[serde(rename = "contenido", deserialize_with = "deserialize_display_string")]
  pub(crate) content: String,
  #[serde(rename = "fecha", deserialize_with = "deserialize_display_string")]
  pub(crate) date: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_forum_field_names() {
    let comment = serde_json::from_str::<Comment>(
      r#"{"usuario":"Ana","fecha":"2024-01-01 10:30","contenido":"Hola"}"#,
    )
    .unwrap();

    assert_eq!(
      comment,
      Comment {
        author: "Ana".into(),
        content: "Hola".into(),
        date: "2024-01-01 10:30".into(),
      }
    );
  }

  #[test]
  fn missing_fields_are_rejected() {
    assert!(
      serde_json::from_str::<Comment>(r#"{"usuario":"Ana","fecha":"hoy"}"#)
        .is_err()
    );
  }
}
