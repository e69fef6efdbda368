use super::*;

/// Body of a rejected submission. The forum answers with `{"error": "..."}`
/// when it explains itself, and anything else otherwise. A `null` body has
/// no fields to read and is treated like a body that is not JSON.
#[derive(Debug, Default)]
pub(crate) struct ErrorResponse {
  error: Value,
}

impl ErrorResponse {
  pub(crate) fn message(self) -> Option<String> {
    match self.error {
      Value::String(message) if !message.is_empty() => Some(message),
      Value::Number(number) => Some(number.to_string()),
      _ => None,
    }
  }

  pub(crate) fn parse(body: &[u8]) -> serde_json::Result<Self> {
    match serde_json::from_slice::<Value>(body)? {
      Value::Object(map) => Ok(Self {
        error: map.get("error").cloned().unwrap_or_default(),
      }),
      Value::Null => Err(de::Error::custom("error response body is null")),
      _ => Ok(Self::default()),
    }
  }
}
