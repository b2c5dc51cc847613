//! Parsing of the semi-structured translation reply.
//!
//! The prompt asks the model for
//! ```text
//! 检测语言: <code>
//! 翻译结果: <text>
//! ```
//! but models do not reliably comply, so an unformatted reply is used
//! verbatim as the translation.

const DETECTED_LABEL: &str = "检测语言:";
const RESULT_LABEL: &str = "翻译结果:";

/// Extract (translated text, detected source language) from a reply.
///
/// Both labels must be present for the structured path; otherwise the
/// whole reply is the translation and the detected language falls back
/// to the requested source ("auto" yields None).
pub fn parse_translation_response(
    content: &str,
    requested_source: &str,
) -> (String, Option<String>) {
    let detected = capture_language_code(content);
    let translated = content
        .find(RESULT_LABEL)
        .map(|pos| content[pos + RESULT_LABEL.len()..].trim());

    match (detected, translated) {
        (Some(code), Some(text)) => (text.to_string(), Some(code.to_lowercase())),
        _ => {
            let detected = if requested_source == "auto" {
                None
            } else {
                Some(requested_source.to_string())
            };
            (content.trim().to_string(), detected)
        }
    }
}

/// `[a-zA-Z-]+` immediately after the detected-language label
fn capture_language_code(content: &str) -> Option<&str> {
    let pos = content.find(DETECTED_LABEL)?;
    let rest = content[pos + DETECTED_LABEL.len()..].trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic() && c != '-')
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_reply_is_parsed() {
        let content = "检测语言: zh\n翻译结果: Hello world";
        let (text, detected) = parse_translation_response(content, "auto");
        assert_eq!(text, "Hello world");
        assert_eq!(detected.as_deref(), Some("zh"));
    }

    #[test]
    fn detected_code_is_lowercased() {
        let content = "检测语言: ZH-CN\n翻译结果: hi";
        let (_, detected) = parse_translation_response(content, "auto");
        assert_eq!(detected.as_deref(), Some("zh-cn"));
    }

    #[test]
    fn multiline_translation_is_kept_whole() {
        let content = "检测语言: en\n翻译结果: 第一行\n第二行";
        let (text, _) = parse_translation_response(content, "auto");
        assert_eq!(text, "第一行\n第二行");
    }

    #[test]
    fn unformatted_reply_is_used_verbatim() {
        let (text, detected) = parse_translation_response("你好世界", "auto");
        assert_eq!(text, "你好世界");
        assert_eq!(detected, None);
    }

    #[test]
    fn unformatted_reply_keeps_pinned_source() {
        let (text, detected) = parse_translation_response("hello", "zh-CN");
        assert_eq!(text, "hello");
        assert_eq!(detected.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn missing_result_label_falls_back() {
        let (text, detected) = parse_translation_response("检测语言: zh\nno result here", "auto");
        assert_eq!(text, "检测语言: zh\nno result here");
        assert_eq!(detected, None);
    }
}
