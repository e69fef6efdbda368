use super::*;

pub(crate) const EMPTY_CONTENT_ALERT: &str =
  "El comentario no puede estar vacío.";

pub(crate) const REJECTED_ALERT: &str = "Error al enviar comentario.";

pub(crate) const TRANSPORT_ALERT: &str = "Error de red o servidor.";

#[derive(Debug, Error)]
pub(crate) enum SubmitError {
  #[error("comment content is empty")]
  EmptyContent,
  #[error("server answered {status} with an unreadable body")]
  InvalidResponse {
    status: StatusCode,
    #[source]
    source: serde_json::Error,
  },
  #[error("server rejected the comment with {status}{}", format_reason(.message.as_deref()))]
  Rejected {
    message: Option<String>,
    status: StatusCode,
  },
  #[error("request failed")]
  Transport(#[from] reqwest::Error),
}

impl SubmitError {
  /// The text shown to the person submitting.
  pub(crate) fn alert(&self) -> &str {
    match self {
      Self::EmptyContent => EMPTY_CONTENT_ALERT,
      Self::Rejected { message, .. } => {
        message.as_deref().unwrap_or(REJECTED_ALERT)
      }
      Self::InvalidResponse { .. } | Self::Transport(_) => TRANSPORT_ALERT,
    }
  }
}

fn format_reason(message: Option<&str>) -> String {
  message.map(|message| format!(": {message}")).unwrap_or_default()
}
