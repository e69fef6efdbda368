use super::*;

#[derive(Debug, Serialize)]
pub(crate) struct NewComment<'a> {
  #[serde(rename = "contenido")]
  pub(crate) content: &'a str,
}
