use super::*;

/// Submits `messages` one after another through `submitter`, writing each
/// posted comment to `out`. Failures are alerted as they happen and counted.
pub(crate) async fn post_messages<N: Notifier, W: Write>(
  submitter: &mut CommentSubmitter<N>,
  messages: &[String],
  format: OutputFormat,
  out: &mut W,
) -> Result {
  let mut failed = 0usize;

  for message in messages {
    submitter.form_mut().set(message.as_str());

    let posted = submitter
      .handle_submit()
      .await
      .and_then(|index| submitter.list().entries().get(index));

    match posted {
      Some(entry) => writeln!(out, "{}", format.render(entry))?,
      None => failed += 1,
    }
  }

  if failed > 0 {
    bail!("{failed} of {} comments were not posted", messages.len());
  }

  Ok(())
}
