use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Client {
  base_url: Url,
  client: reqwest::Client,
  session_cookie: Option<String>,
}

impl Client {
  const COMMENT_PATH: &str = "comentario_ajax";

  const THREAD_PATH: &str = "hilo";

  pub(crate) fn comment_endpoint(&self, thread: &ThreadId) -> Result<Url> {
    self.endpoint(Self::COMMENT_PATH, thread)
  }

  fn endpoint(&self, prefix: &str, thread: &ThreadId) -> Result<Url> {
    let mut url = self.base_url.clone();

    url
      .path_segments_mut()
      .map_err(|()| anyhow!("server url `{}` cannot be a base", self.base_url))?
      .pop_if_empty()
      .push(prefix)
      .push(thread.as_str());

    Ok(url)
  }

  pub(crate) fn new(
    base_url: Url,
    session_cookie: Option<String>,
  ) -> Result<Self> {
    if base_url.cannot_be_a_base() {
      bail!("server url `{base_url}` cannot be a base");
    }

    Ok(Self {
      base_url,
      client: reqwest::Client::new(),
      session_cookie,
    })
  }

  pub(crate) async fn post_comment(
    &self,
    endpoint: &Url,
    content: &str,
  ) -> Result<Comment, SubmitError> {
    tracing::debug!(%endpoint, "posting comment");

    let mut request = self
      .client
      .post(endpoint.clone())
      .json(&NewComment { content });

    if let Some(cookie) = &self.session_cookie {
      request = request.header(header::COOKIE, cookie);
    }

    let response = request.send().await?;

    let status = response.status();

    let body = response.bytes().await?;

    if !status.is_success() {
      let message = ErrorResponse::parse(&body)
        .map_err(|source| SubmitError::InvalidResponse { status, source })?
        .message();

      tracing::warn!(%status, ?message, "comment rejected");

      return Err(SubmitError::Rejected { message, status });
    }

    let comment = serde_json::from_slice::<Comment>(&body)
      .map_err(|source| SubmitError::InvalidResponse { status, source })?;

    tracing::info!(%status, author = %comment.author, "comment accepted");

    Ok(comment)
  }

  pub(crate) fn thread_page(&self, thread: &ThreadId) -> Result<Url> {
    self.endpoint(Self::THREAD_PATH, thread)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    serde_json::json,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{body_json, header as header_matcher, method, path},
    },
  };

  fn client_for(server: &MockServer) -> Client {
    Client::new(Url::parse(&server.uri()).unwrap(), None).unwrap()
  }

  fn thread(id: &str) -> ThreadId {
    id.parse().unwrap()
  }

  #[test]
  fn endpoints_are_built_under_the_server_path() {
    let client =
      Client::new(Url::parse("https://example.com/foro/").unwrap(), None)
        .unwrap();

    assert_eq!(
      client.comment_endpoint(&thread("42")).unwrap().as_str(),
      "https://example.com/foro/comentario_ajax/42"
    );

    assert_eq!(
      client.thread_page(&thread("42")).unwrap().as_str(),
      "https://example.com/foro/hilo/42"
    );
  }

  #[test]
  fn thread_identifier_is_a_single_encoded_segment() {
    let client =
      Client::new(Url::parse("http://localhost:5000").unwrap(), None).unwrap();

    assert_eq!(
      client.comment_endpoint(&thread("a/b c")).unwrap().as_str(),
      "http://localhost:5000/comentario_ajax/a%2Fb%20c"
    );
  }

  #[test]
  fn encoded_thread_url_keeps_its_encoding_in_endpoint() {
    let client =
      Client::new(Url::parse("http://localhost:5000").unwrap(), None).unwrap();

    let thread =
      ThreadId::from_url("http://localhost:5000/hilo/caf%C3%A9").unwrap();

    assert_eq!(
      client.comment_endpoint(&thread).unwrap().as_str(),
      "http://localhost:5000/comentario_ajax/caf%C3%A9"
    );
  }

  #[test]
  fn rejects_servers_that_cannot_carry_a_path() {
    assert!(
      Client::new(Url::parse("mailto:foro@example.com").unwrap(), None)
        .is_err()
    );
  }

  #[tokio::test]
  async fn post_comment_sends_json_and_reads_comment() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/comentario_ajax/7"))
      .and(header_matcher("content-type", "application/json"))
      .and(body_json(json!({ "contenido": "Hola" })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "usuario": "Ana",
        "fecha": "2024-01-01 09:00",
        "contenido": "Hola",
      })))
      .expect(1)
      .mount(&server)
      .await;

    let client = client_for(&server);

    let endpoint = client.comment_endpoint(&thread("7")).unwrap();

    let comment = client.post_comment(&endpoint, "Hola").await.unwrap();

    assert_eq!(comment.author, "Ana");
    assert_eq!(comment.date, "2024-01-01 09:00");
    assert_eq!(comment.content, "Hola");
  }

  #[tokio::test]
  async fn post_comment_forwards_session_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(header_matcher("cookie", "session=abc"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "usuario": "Ana",
        "fecha": "hoy",
        "contenido": "x",
      })))
      .expect(1)
      .mount(&server)
      .await;

    let client = Client::new(
      Url::parse(&server.uri()).unwrap(),
      Some("session=abc".into()),
    )
    .unwrap();

    let endpoint = client.comment_endpoint(&thread("1")).unwrap();

    assert!(client.post_comment(&endpoint, "x").await.is_ok());
  }

  #[tokio::test]
  async fn rejection_carries_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .respond_with(
        ResponseTemplate::new(403)
          .set_body_json(json!({ "error": "Not logged in" })),
      )
      .mount(&server)
      .await;

    let client = client_for(&server);

    let endpoint = client.comment_endpoint(&thread("1")).unwrap();

    match client.post_comment(&endpoint, "x").await {
      Err(SubmitError::Rejected { message, status }) => {
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(message.as_deref(), Some("Not logged in"));
      }
      other => panic!("unexpected result: {other:?}"),
    }
  }

  #[tokio::test]
  async fn malformed_success_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .respond_with(
        ResponseTemplate::new(200).set_body_string("<html>login</html>"),
      )
      .mount(&server)
      .await;

    let client = client_for(&server);

    let endpoint = client.comment_endpoint(&thread("1")).unwrap();

    assert!(matches!(
      client.post_comment(&endpoint, "x").await,
      Err(SubmitError::InvalidResponse { status, .. }) if status == StatusCode::OK
    ));
  }
}
