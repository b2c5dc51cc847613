//! Segmented rendering of corrected text for review.

use fanyi_types::Correction;

/// Which side of a correction pair to mark up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSide {
    /// Removed spans (rendered struck through)
    Original,
    /// Inserted spans
    Corrected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSegment {
    Plain(String),
    Highlighted { text: String, side: DiffSide },
}

/// Split `text` into plain and highlighted segments.
///
/// Greedy forward-only matcher: each correction is searched for at or
/// after the cursor left by the previous match. Corrections whose span
/// is empty or not found ahead of the cursor are dropped without error,
/// so out-of-order or duplicate pairs referencing earlier text produce
/// no segment. An empty result means nothing matched; callers should
/// fall back to rendering `text` as a single plain block.
pub fn highlight(text: &str, corrections: &[Correction], side: DiffSide) -> Vec<DiffSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0usize;

    for correction in corrections {
        let target = match side {
            DiffSide::Original => correction.original.as_str(),
            DiffSide::Corrected => correction.corrected.as_str(),
        };
        if target.is_empty() {
            continue;
        }

        let Some(found) = text[cursor..].find(target) else {
            continue;
        };
        let start = cursor + found;

        if start > cursor {
            segments.push(DiffSegment::Plain(text[cursor..start].to_string()));
        }
        segments.push(DiffSegment::Highlighted {
            text: target.to_string(),
            side,
        });
        cursor = start + target.len();
    }

    if segments.is_empty() {
        return segments;
    }

    if cursor < text.len() {
        segments.push(DiffSegment::Plain(text[cursor..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corr(original: &str, corrected: &str) -> Correction {
        Correction {
            original: original.to_string(),
            corrected: corrected.to_string(),
        }
    }

    #[test]
    fn single_correction_splits_into_three_segments() {
        let segments = highlight(
            "The quick fox",
            &[corr("quick", "slow")],
            DiffSide::Original,
        );
        assert_eq!(
            segments,
            vec![
                DiffSegment::Plain("The ".to_string()),
                DiffSegment::Highlighted {
                    text: "quick".to_string(),
                    side: DiffSide::Original,
                },
                DiffSegment::Plain(" fox".to_string()),
            ]
        );
    }

    #[test]
    fn corrected_side_matches_corrected_spans() {
        let segments = highlight("The slow fox", &[corr("quick", "slow")], DiffSide::Corrected);
        assert_eq!(
            segments,
            vec![
                DiffSegment::Plain("The ".to_string()),
                DiffSegment::Highlighted {
                    text: "slow".to_string(),
                    side: DiffSide::Corrected,
                },
                DiffSegment::Plain(" fox".to_string()),
            ]
        );
    }

    #[test]
    fn missing_span_is_dropped_silently() {
        let segments = highlight("abc", &[corr("zzz", "yyy")], DiffSide::Original);
        assert!(segments.is_empty());
    }

    #[test]
    fn empty_span_is_skipped() {
        let segments = highlight("abc", &[corr("", "x")], DiffSide::Original);
        assert!(segments.is_empty());
    }

    #[test]
    fn cursor_advances_monotonically() {
        // Second correction refers to text before the cursor; it is dropped.
        let segments = highlight(
            "one two three",
            &[corr("two", "2"), corr("one", "1")],
            DiffSide::Original,
        );
        assert_eq!(
            segments,
            vec![
                DiffSegment::Plain("one ".to_string()),
                DiffSegment::Highlighted {
                    text: "two".to_string(),
                    side: DiffSide::Original,
                },
                DiffSegment::Plain(" three".to_string()),
            ]
        );
    }

    #[test]
    fn adjacent_matches_emit_no_empty_plain_segments() {
        let segments = highlight(
            "ab",
            &[corr("a", "x"), corr("b", "y")],
            DiffSide::Original,
        );
        assert_eq!(
            segments,
            vec![
                DiffSegment::Highlighted {
                    text: "a".to_string(),
                    side: DiffSide::Original,
                },
                DiffSegment::Highlighted {
                    text: "b".to_string(),
                    side: DiffSide::Original,
                },
            ]
        );
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        let segments = highlight("你好世界", &[corr("好世", "x")], DiffSide::Original);
        assert_eq!(
            segments,
            vec![
                DiffSegment::Plain("你".to_string()),
                DiffSegment::Highlighted {
                    text: "好世".to_string(),
                    side: DiffSide::Original,
                },
                DiffSegment::Plain("界".to_string()),
            ]
        );
    }
}
