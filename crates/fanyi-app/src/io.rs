use fanyi_types::{AppEvent, SpeakTarget, TextSource};
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Stdin watcher: plain lines are source text, ":"-prefixed lines are
/// commands. Feeds the event loop until EOF or cancellation.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Some(event) => event_tx.send(event).await?,
                    None => tracing::warn!(line = %line, "unrecognized command"),
                }
            }
        }
    }

    Ok(())
}

/// Map one input line to an event. Unknown commands yield None.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let trimmed = line.trim();
    if !trimmed.starts_with(':') {
        return Some(AppEvent::TextInput {
            text: line.to_string(),
            source: TextSource::Typed,
        });
    }

    let mut parts = trimmed.splitn(2, ' ');
    let command = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match command {
        ":translate" | ":t" => Some(AppEvent::ManualTranslate),
        ":swap" => Some(AppEvent::SwapLanguages),
        ":source" if !arg.is_empty() => Some(AppEvent::SourceLangChanged(arg.to_string())),
        ":target" if !arg.is_empty() => Some(AppEvent::TargetLangChanged(arg.to_string())),
        ":ocr" if !arg.is_empty() => Some(AppEvent::TextInput {
            text: arg.to_string(),
            source: TextSource::Ocr,
        }),
        ":correct" => Some(AppEvent::RequestCorrection),
        ":accept" => Some(AppEvent::AcceptCorrection),
        ":reject" => Some(AppEvent::RejectCorrection),
        ":speak" => match arg {
            "out" | "output" => Some(AppEvent::Speak(SpeakTarget::Output)),
            _ => Some(AppEvent::Speak(SpeakTarget::Input)),
        },
        ":stop" => Some(AppEvent::StopSpeaking),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_is_typed_input() {
        match parse_line("hello world") {
            Some(AppEvent::TextInput { text, source }) => {
                assert_eq!(text, "hello world");
                assert_eq!(source, TextSource::Typed);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn commands_parse_with_arguments() {
        assert!(matches!(parse_line(":translate"), Some(AppEvent::ManualTranslate)));
        assert!(matches!(parse_line(":swap"), Some(AppEvent::SwapLanguages)));
        assert!(matches!(
            parse_line(":target en"),
            Some(AppEvent::TargetLangChanged(code)) if code == "en"
        ));
        assert!(matches!(
            parse_line(":ocr Helo world"),
            Some(AppEvent::TextInput { source: TextSource::Ocr, .. })
        ));
        assert!(matches!(
            parse_line(":speak out"),
            Some(AppEvent::Speak(SpeakTarget::Output))
        ));
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(parse_line(":nonsense").is_none());
        assert!(parse_line(":source").is_none());
    }
}
