//! Parser for the semi-structured correction reply.
//!
//! The model is asked for
//! ```text
//! 修正置信度: <0-10>
//! 修正结果: <corrected text>
//! 主要修正: <newline-separated "original->corrected" pairs>
//! ```
//! Format compliance varies between models, so each label has an
//! explicit fallback rule; the branches are unit-tested independently.

use fanyi_types::{Correction, CorrectionResult};

pub const CONFIDENCE_LABEL: &str = "修正置信度:";
pub const RESULT_LABEL: &str = "修正结果:";
pub const CORRECTIONS_LABEL: &str = "主要修正:";

/// Parse a correction reply against the original OCR text.
///
/// Rules, in order:
/// 1. Confidence is the digit run after the confidence label, 0 when
///    absent, capped at 10.
/// 2. Corrected text spans from the result label to the corrections
///    label (or end of reply), trimmed.
/// 3. Without a result label, a reply longer than 10 chars that does
///    not contain the confidence label is itself the corrected text,
///    at confidence 5.
/// 4. Correction pairs are the lines after the corrections label that
///    contain "->", split on the first "->", both sides trimmed.
/// 5. A corrected text identical to the original forces confidence 0.
pub fn parse_correction_response(content: &str, original_text: &str) -> CorrectionResult {
    let mut corrected_text = original_text.to_string();
    let mut confidence = capture_confidence(content).unwrap_or(0);

    if let Some(span) = capture_corrected(content) {
        corrected_text = span.trim().to_string();
    } else if content.chars().count() > 10 && !content.contains(CONFIDENCE_LABEL) {
        corrected_text = content.to_string();
        confidence = 5;
    }

    let mut corrections = Vec::new();
    if let Some(pos) = content.find(CORRECTIONS_LABEL) {
        let rest = &content[pos + CORRECTIONS_LABEL.len()..];
        for line in rest.lines() {
            if let Some((original, corrected)) = line.split_once("->") {
                corrections.push(Correction {
                    original: original.trim().to_string(),
                    corrected: corrected.trim().to_string(),
                });
            }
        }
    }

    // "No textual change" must never report a nonzero confidence
    if corrected_text == original_text {
        confidence = 0;
    }

    CorrectionResult {
        has_changes: corrected_text != original_text,
        confidence,
        corrections,
        corrected_text,
    }
}

fn capture_confidence(content: &str) -> Option<u8> {
    let pos = content.find(CONFIDENCE_LABEL)?;
    let rest = content[pos + CONFIDENCE_LABEL.len()..].trim_start();
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value: u32 = digits.parse().ok()?;
    Some(value.min(10) as u8)
}

fn capture_corrected(content: &str) -> Option<&str> {
    let pos = content.find(RESULT_LABEL)?;
    let tail = &content[pos + RESULT_LABEL.len()..];
    let end = tail.find(CORRECTIONS_LABEL).unwrap_or(tail.len());
    Some(&tail[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_reply_round_trips() {
        let content = "修正置信度: 7\n修正结果: Hello world\n主要修正: Helo->Hello";
        let result = parse_correction_response(content, "Helo world");

        assert_eq!(result.confidence, 7);
        assert_eq!(result.corrected_text, "Hello world");
        assert_eq!(
            result.corrections,
            vec![Correction {
                original: "Helo".to_string(),
                corrected: "Hello".to_string(),
            }]
        );
        assert!(result.has_changes);
    }

    #[test]
    fn multiline_corrected_text_stops_at_corrections_label() {
        let content = "修正置信度: 3\n修正结果: line one\nline two\n主要修正: a->b";
        let result = parse_correction_response(content, "x");
        assert_eq!(result.corrected_text, "line one\nline two");
    }

    #[test]
    fn missing_confidence_defaults_to_zero() {
        let content = "修正结果: fixed text here";
        let result = parse_correction_response(content, "broken text here");
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn confidence_is_capped_at_ten() {
        let content = "修正置信度: 99\n修正结果: fixed";
        let result = parse_correction_response(content, "broken");
        assert_eq!(result.confidence, 10);
    }

    #[test]
    fn unformatted_long_reply_becomes_corrected_text_at_confidence_five() {
        let content = "This is the corrected version of the text.";
        let result = parse_correction_response(content, "Ths is teh corrected version.");
        assert_eq!(result.corrected_text, content);
        assert_eq!(result.confidence, 5);
        assert!(result.has_changes);
    }

    #[test]
    fn short_unformatted_reply_leaves_original_untouched() {
        let result = parse_correction_response("ok", "original text");
        assert_eq!(result.corrected_text, "original text");
        assert_eq!(result.confidence, 0);
        assert!(!result.has_changes);
    }

    #[test]
    fn unformatted_reply_mentioning_confidence_label_is_not_trusted() {
        let content = "抱歉，无法按照修正置信度:的格式返回结果";
        let result = parse_correction_response(content, "original");
        assert_eq!(result.corrected_text, "original");
        assert!(!result.has_changes);
    }

    #[test]
    fn correction_lines_without_arrow_are_ignored() {
        let content = "修正结果: fixed\n主要修正: \n没有箭头的行\na->b\nc->d";
        let result = parse_correction_response(content, "broken");
        assert_eq!(result.corrections.len(), 2);
        assert_eq!(result.corrections[1].original, "c");
        assert_eq!(result.corrections[1].corrected, "d");
    }

    #[test]
    fn pairs_split_on_first_arrow_only() {
        let content = "修正结果: fixed\n主要修正: a->b->c";
        let result = parse_correction_response(content, "broken");
        assert_eq!(result.corrections[0].original, "a");
        assert_eq!(result.corrections[0].corrected, "b->c");
    }

    #[test]
    fn identical_output_forces_confidence_zero() {
        let content = "修正置信度: 9\n修正结果: same text";
        let result = parse_correction_response(content, "same text");
        assert_eq!(result.confidence, 0);
        assert!(!result.has_changes);
    }
}
