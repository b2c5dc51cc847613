//! Voice selection by language code.

/// One installed synthesis voice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    /// BCP 47 tag, e.g. "zh-CN", "en-US"
    pub lang: String,
    pub default: bool,
}

/// Widen a short language code to the regional tag voices are keyed by
fn widen_language_code(code: &str) -> &str {
    match code {
        "zh" | "zh-CN" => "zh-CN",
        "zh-TW" => "zh-TW",
        "en" => "en-US",
        "ja" => "ja-JP",
        "ko" => "ko-KR",
        "fr" => "fr-FR",
        "de" => "de-DE",
        "es" => "es-ES",
        "ru" => "ru-RU",
        "ar" => "ar-SA",
        "hi" => "hi-IN",
        "pt" => "pt-BR",
        "it" => "it-IT",
        "th" => "th-TH",
        "vi" => "vi-VN",
        other => other,
    }
}

/// Pick the best voice for a language code.
///
/// Fallback chain: exact tag match, then language-prefix match, then a
/// substring match on the voice tag or name.
pub fn best_voice_for_language<'a>(voices: &'a [Voice], lang_code: &str) -> Option<&'a Voice> {
    if lang_code.is_empty() || voices.is_empty() {
        return None;
    }

    let target = widen_language_code(lang_code);

    if let Some(voice) = voices.iter().find(|v| v.lang == target) {
        return Some(voice);
    }

    let prefix = target.split('-').next().unwrap_or(target);
    if let Some(voice) = voices.iter().find(|v| v.lang.starts_with(prefix)) {
        return Some(voice);
    }

    let needle = lang_code.to_lowercase();
    voices.iter().find(|v| {
        v.lang.to_lowercase().contains(&needle) || v.name.to_lowercase().contains(&needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, lang: &str) -> Voice {
        Voice {
            name: name.to_string(),
            lang: lang.to_string(),
            default: false,
        }
    }

    #[test]
    fn exact_tag_match_wins() {
        let voices = vec![voice("A", "en-GB"), voice("B", "en-US")];
        assert_eq!(best_voice_for_language(&voices, "en").unwrap().name, "B");
    }

    #[test]
    fn short_codes_are_widened_before_matching() {
        let voices = vec![voice("Mei", "zh-CN")];
        assert_eq!(best_voice_for_language(&voices, "zh").unwrap().name, "Mei");
    }

    #[test]
    fn prefix_match_is_second_choice() {
        let voices = vec![voice("A", "en-AU")];
        assert_eq!(best_voice_for_language(&voices, "en").unwrap().name, "A");
    }

    #[test]
    fn substring_match_on_name_is_last_resort() {
        let voices = vec![voice("Thai Voice th", "und")];
        assert_eq!(
            best_voice_for_language(&voices, "th").unwrap().name,
            "Thai Voice th"
        );
    }

    #[test]
    fn no_match_yields_none() {
        let voices = vec![voice("A", "fr-FR")];
        assert!(best_voice_for_language(&voices, "ko").is_none());
        assert!(best_voice_for_language(&[], "en").is_none());
        assert!(best_voice_for_language(&voices, "").is_none());
    }
}
