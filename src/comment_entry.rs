use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentEntry {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) date: String,
}

impl From<Comment> for CommentEntry {
  fn from(comment: Comment) -> Self {
    Self {
      author: comment.author,
      body: comment.content,
      date: comment.date,
    }
  }
}

impl CommentEntry {
  pub(crate) fn body(&self) -> &str {
    self.body.as_str()
  }

  pub(crate) fn header(&self) -> String {
    format!("{} {}", self.author, self.date)
  }

  /// The fragment the thread page appends to its comment container.
  pub(crate) fn to_html(&self) -> String {
    let body = html_escape::encode_text(&self.body).replace('\n', "<br>");

    format!(
      "<div class=\"comentario\"><p><strong>{}</strong> <small>{}</small></p><p>{body}</p></div>",
      html_escape::encode_text(&self.author),
      html_escape::encode_text(&self.date),
    )
  }

  pub(crate) fn to_text(&self) -> String {
    format!("{}\n{}", self.header(), self.body)
  }
}
