use fanyi_core::diff::{highlight, DiffSegment, DiffSide};
use fanyi_types::{AppEvent, Correction};
use kanal::AsyncReceiver;

/// Console presenter: renders backend events until the channel closes.
pub async fn presenter_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    let ansi = atty::is(atty::Stream::Stdout);

    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowTranslation(translation) => {
                println!(
                    "[{} -> {}] ({})",
                    translation.from_lang, translation.to_lang, translation.service
                );
                println!("{}", translation.text);
            }
            AppEvent::ShowCorrection { original, result } => {
                println!("correction confidence: {}/10", result.confidence);
                println!("--- original ---");
                println!(
                    "{}",
                    render_side(&original, &result.corrections, DiffSide::Original, ansi)
                );
                println!("--- corrected ---");
                println!(
                    "{}",
                    render_side(
                        &result.corrected_text,
                        &result.corrections,
                        DiffSide::Corrected,
                        ansi,
                    )
                );
                if result.has_changes {
                    println!("(:accept to apply, :reject to discard)");
                } else {
                    println!("(no changes proposed)");
                }
            }
            AppEvent::StatusUpdate { status } => {
                println!("* {status}");
            }
            AppEvent::ShowError(message) => {
                eprintln!("! {message}");
            }
            _ => {}
        }
    }

    Ok(())
}

/// Flatten diff segments to a console string; highlighted spans are
/// struck through (original side) or colored (corrected side) when the
/// terminal supports it. No matched segment falls back to plain text.
fn render_side(text: &str, corrections: &[Correction], side: DiffSide, ansi: bool) -> String {
    let segments = highlight(text, corrections, side);
    if segments.is_empty() {
        return text.to_string();
    }

    let mut out = String::new();
    for segment in segments {
        match segment {
            DiffSegment::Plain(s) => out.push_str(&s),
            DiffSegment::Highlighted { text, side } => {
                if ansi {
                    match side {
                        DiffSide::Original => {
                            out.push_str("\x1b[9;31m");
                            out.push_str(&text);
                            out.push_str("\x1b[0m");
                        }
                        DiffSide::Corrected => {
                            out.push_str("\x1b[32m");
                            out.push_str(&text);
                            out.push_str("\x1b[0m");
                        }
                    }
                } else {
                    match side {
                        DiffSide::Original => {
                            out.push_str("[-");
                            out.push_str(&text);
                            out.push_str("-]");
                        }
                        DiffSide::Corrected => {
                            out.push_str("{+");
                            out.push_str(&text);
                            out.push_str("+}");
                        }
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_corrections_fall_back_to_plain_text() {
        let corrections = vec![Correction {
            original: "zzz".to_string(),
            corrected: "yyy".to_string(),
        }];
        assert_eq!(
            render_side("abc", &corrections, DiffSide::Original, false),
            "abc"
        );
    }

    #[test]
    fn plain_markers_are_used_without_a_terminal() {
        let corrections = vec![Correction {
            original: "Helo".to_string(),
            corrected: "Hello".to_string(),
        }];
        assert_eq!(
            render_side("Helo world", &corrections, DiffSide::Original, false),
            "[-Helo-] world"
        );
        assert_eq!(
            render_side("Hello world", &corrections, DiffSide::Corrected, false),
            "{+Hello+} world"
        );
    }
}
