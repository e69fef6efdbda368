use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ThreadId(String);

impl ThreadId {
  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }

  /// Takes the last segment of the page path, the way the forum routes
  /// `/hilo/<id>`. Query and fragment are not part of the path. The segment
  /// is decoded so building an endpoint encodes it exactly once.
  pub(crate) fn from_url(url: &str) -> Result<Self> {
    let parsed =
      Url::parse(url).with_context(|| format!("invalid thread url `{url}`"))?;

    let segment = parsed
      .path_segments()
      .and_then(|mut segments| segments.next_back())
      .unwrap_or_default();

    if segment.is_empty() {
      bail!("thread url `{url}` does not end in a thread identifier");
    }

    let decoded = percent_decode_str(segment).decode_utf8().with_context(
      || format!("thread identifier in `{url}` is not valid UTF-8"),
    )?;

    Ok(Self(decoded.into_owned()))
  }
}

impl Display for ThreadId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for ThreadId {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
      bail!("thread identifier must not be empty");
    }

    Ok(Self(trimmed.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, rstest::rstest};

  #[rstest]
  #[case::plain("http://localhost:5000/hilo/42", "42")]
  #[case::query("http://localhost:5000/hilo/42?page=2", "42")]
  #[case::fragment("http://localhost:5000/hilo/42#comentarios", "42")]
  #[case::prefixed("https://example.com/foro/hilo/abc", "abc")]
  #[case::encoded("http://localhost:5000/hilo/caf%C3%A9", "café")]
  #[case::encoded_space("http://localhost:5000/hilo/a%20b", "a b")]
  fn from_url_takes_final_path_segment(
    #[case] url: &str,
    #[case] expected: &str,
  ) {
    assert_eq!(ThreadId::from_url(url).unwrap().as_str(), expected);
  }

  #[rstest]
  #[case::trailing_slash("http://localhost:5000/hilo/")]
  #[case::root("http://localhost:5000/")]
  #[case::not_a_url("hilo/42")]
  #[case::invalid_utf8("http://localhost:5000/hilo/%FF")]
  fn from_url_rejects_urls_without_identifier(#[case] url: &str) {
    assert!(ThreadId::from_url(url).is_err());
  }

  #[test]
  fn from_str_trims_and_rejects_blank() {
    assert_eq!(" 7 ".parse::<ThreadId>().unwrap().as_str(), "7");
    assert!("   ".parse::<ThreadId>().is_err());
  }
}
