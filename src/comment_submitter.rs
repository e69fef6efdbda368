use super::*;

/// Owns the comment form and the list it renders into for one thread.
///
/// A submission validates the form, posts its content, then either appends
/// the comment the forum returns and clears the form, or raises an alert and
/// leaves everything as it was. Nothing stops a second submission while a
/// first one is in flight; each result is applied when it arrives.
#[derive(Debug)]
pub(crate) struct CommentSubmitter<N> {
  client: Client,
  endpoint: Url,
  form: CommentForm,
  list: CommentList,
  notifier: N,
  thread: ThreadId,
}

impl<N: Notifier> CommentSubmitter<N> {
  /// Validates the form. Returns the request to send, or `None` after
  /// alerting when there is nothing to submit.
  pub(crate) fn begin_submit(&mut self) -> Option<Submission> {
    let content = self.form.content();

    if content.is_empty() {
      self.fail(&SubmitError::EmptyContent);
      return None;
    }

    Some(Submission {
      content: content.to_string(),
      endpoint: self.endpoint.clone(),
    })
  }

  pub(crate) fn client(&self) -> &Client {
    &self.client
  }

  fn fail(&mut self, error: &SubmitError) {
    tracing::warn!(thread = %self.thread, error = ?error, "comment not posted");

    self.notifier.alert(error.alert());
  }

  /// Applies the outcome of a submission. Returns the index of the appended
  /// entry on success.
  pub(crate) fn finish_submit(
    &mut self,
    result: Result<Comment, SubmitError>,
  ) -> Option<usize> {
    match result {
      Ok(comment) => {
        let index = self.list.append(CommentEntry::from(comment));

        self.form.clear();

        tracing::info!(thread = %self.thread, index, "comment appended");

        Some(index)
      }
      Err(error) => {
        self.fail(&error);
        None
      }
    }
  }

  pub(crate) fn form(&self) -> &CommentForm {
    &self.form
  }

  pub(crate) fn form_mut(&mut self) -> &mut CommentForm {
    &mut self.form
  }

  pub(crate) async fn handle_submit(&mut self) -> Option<usize> {
    let submission = self.begin_submit()?;

    let result = submission.send(&self.client).await;

    self.finish_submit(result)
  }

  pub(crate) fn list(&self) -> &CommentList {
    &self.list
  }

  pub(crate) fn list_mut(&mut self) -> &mut CommentList {
    &mut self.list
  }

  pub(crate) fn new(
    client: Client,
    thread: ThreadId,
    notifier: N,
  ) -> Result<Self> {
    let endpoint = client.comment_endpoint(&thread)?;

    Ok(Self {
      client,
      endpoint,
      form: CommentForm::default(),
      list: CommentList::default(),
      notifier,
      thread,
    })
  }

  pub(crate) fn notifier(&self) -> &N {
    &self.notifier
  }

  pub(crate) fn notifier_mut(&mut self) -> &mut N {
    &mut self.notifier
  }

  pub(crate) fn thread(&self) -> &ThreadId {
    &self.thread
  }
}
