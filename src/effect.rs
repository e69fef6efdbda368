use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  OpenUrl { url: String },
  SubmitComment { submission: Submission },
}
