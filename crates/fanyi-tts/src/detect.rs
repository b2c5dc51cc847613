//! Script-based language detection for choosing a speaking voice.

use fanyi_core::language::chinese_ratio;

/// Guess a speaking language from the dominant script of the text.
/// Falls back to "en" when no script is recognized.
pub fn detect_text_language(text: &str) -> &'static str {
    if text.trim().is_empty() {
        return "en";
    }

    if chinese_ratio(text) > 0.3 {
        // Distinguish traditional-script markers
        if text.chars().any(|c| matches!(c, '繁' | '體' | '傳' | '統')) {
            return "zh-TW";
        }
        return "zh-CN";
    }

    if text
        .chars()
        .any(|c| ('\u{3040}'..='\u{309f}').contains(&c) || ('\u{30a0}'..='\u{30ff}').contains(&c))
    {
        return "ja";
    }

    if text.chars().any(|c| ('\u{ac00}'..='\u{d7af}').contains(&c)) {
        return "ko";
    }

    if text.chars().any(|c| ('\u{0600}'..='\u{06ff}').contains(&c)) {
        return "ar";
    }

    "en"
}
