use super::*;

pub(crate) enum Event {
  CommentSubmitted { result: Result<Comment, SubmitError> },
}
