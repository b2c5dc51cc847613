//! Character-ratio language heuristic and smart target switching.
//!
//! Two distinct entry points exist on purpose: `smart_target_language`
//! runs *before* a translation request and decides the target actually
//! sent; `reconcile_from_detected` runs *after* the response and corrects
//! the displayed target from the server-detected source language. They
//! must be called at their respective points, not interchanged.

/// Dominant script predicted for a piece of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictedLanguage {
    Chinese,
    English,
}

impl PredictedLanguage {
    pub fn code(self) -> &'static str {
        match self {
            PredictedLanguage::Chinese => "zh",
            PredictedLanguage::English => "en",
        }
    }
}

fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Fraction of non-whitespace chars in the CJK Unified Ideographs block.
/// Returns 0.0 for empty or whitespace-only input.
pub fn chinese_ratio(text: &str) -> f64 {
    let total = text.chars().filter(|c| !c.is_whitespace()).count();
    if total == 0 {
        return 0.0;
    }
    let cjk = text.chars().filter(|c| is_cjk_ideograph(*c)).count();
    cjk as f64 / total as f64
}

/// Chinese iff more than 30% of non-whitespace chars are CJK ideographs.
/// Everything else is assumed English and left for the API to detect.
pub fn predict_language(text: &str) -> PredictedLanguage {
    if chinese_ratio(text) > 0.3 {
        PredictedLanguage::Chinese
    } else {
        PredictedLanguage::English
    }
}

/// Pick the target language to actually send, before the request goes out.
///
/// Only active when auto-switch is on and the source selector is "auto".
/// The policy is asymmetric: Chinese input prefers an "en" target,
/// non-Chinese input prefers "zh-CN". It does not generalize to other
/// language pairs.
pub fn smart_target_language(
    input_text: &str,
    current_target: &str,
    current_source: &str,
    auto_switch_enabled: bool,
) -> String {
    if !auto_switch_enabled || current_source != "auto" {
        return current_target.to_string();
    }

    match predict_language(input_text) {
        PredictedLanguage::Chinese if current_target != "en" => "en".to_string(),
        PredictedLanguage::English if current_target != "zh-CN" => "zh-CN".to_string(),
        _ => current_target.to_string(),
    }
}

/// Correct the displayed target after a response reports the detected
/// source language. Case-insensitive; authoritative for UI display since
/// it reflects what the request actually translated from.
pub fn reconcile_from_detected(
    detected_language: &str,
    current_target: &str,
    auto_switch_enabled: bool,
) -> String {
    if !auto_switch_enabled {
        return current_target.to_string();
    }

    let detected = detected_language.to_lowercase();

    if matches!(detected.as_str(), "zh" | "zh-cn" | "zh-tw") {
        if current_target != "en" {
            return "en".to_string();
        }
    } else if detected == "en" && current_target != "zh-CN" {
        return "zh-CN".to_string();
    }

    current_target.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_ratio() {
        assert_eq!(chinese_ratio(""), 0.0);
        assert_eq!(chinese_ratio("   \n\t"), 0.0);
    }

    #[test]
    fn whitespace_is_excluded_from_denominator() {
        // 2 CJK out of 2 non-whitespace chars
        assert_eq!(chinese_ratio("你 好"), 1.0);
    }

    #[test]
    fn pure_ascii_predicts_english() {
        assert_eq!(predict_language("hello world"), PredictedLanguage::English);
        assert_eq!(predict_language(""), PredictedLanguage::English);
    }

    #[test]
    fn pure_cjk_predicts_chinese() {
        assert_eq!(predict_language("你好世界"), PredictedLanguage::Chinese);
    }

    #[test]
    fn ratio_threshold_is_strict() {
        // 3 CJK out of 10 non-whitespace chars = exactly 0.3, not above
        assert_eq!(
            predict_language("你好吗abcdefg"),
            PredictedLanguage::English
        );
    }

    #[test]
    fn smart_target_is_noop_when_disabled_or_pinned() {
        assert_eq!(smart_target_language("你好", "zh-CN", "auto", false), "zh-CN");
        assert_eq!(smart_target_language("你好", "zh-CN", "en", true), "zh-CN");
    }

    #[test]
    fn chinese_input_switches_target_to_english() {
        assert_eq!(smart_target_language("你好世界", "zh-CN", "auto", true), "en");
        assert_eq!(smart_target_language("你好世界", "en", "auto", true), "en");
    }

    #[test]
    fn english_input_switches_target_to_simplified_chinese() {
        assert_eq!(smart_target_language("hello", "en", "auto", true), "zh-CN");
        assert_eq!(smart_target_language("hello", "ja", "auto", true), "zh-CN");
        assert_eq!(smart_target_language("hello", "zh-CN", "auto", true), "zh-CN");
    }

    #[test]
    fn reconcile_is_case_insensitive() {
        assert_eq!(reconcile_from_detected("ZH-CN", "zh-CN", true), "en");
        assert_eq!(reconcile_from_detected("EN", "zh-CN", true), "zh-CN");
    }

    #[test]
    fn reconcile_leaves_other_languages_alone() {
        assert_eq!(reconcile_from_detected("ja", "zh-CN", true), "zh-CN");
        assert_eq!(reconcile_from_detected("fr", "en", true), "en");
    }

    #[test]
    fn reconcile_is_noop_when_disabled() {
        assert_eq!(reconcile_from_detected("zh", "zh-CN", false), "zh-CN");
    }
}
