use super::*;

/// A validated comment on its way to the forum.
#[derive(Clone, Debug)]
pub(crate) struct Submission {
  pub(crate) content: String,
  pub(crate) endpoint: Url,
}

impl Submission {
  pub(crate) async fn send(self, client: &Client) -> Result<Comment, SubmitError> {
    client.post_comment(&self.endpoint, &self.content).await
  }
}
