//! Language code tables used for prompt building and selector lists.

pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("auto", "自动检测"),
    ("zh-CN", "简体中文"),
    ("zh-TW", "繁体中文"),
    ("en", "English"),
    ("ja", "日本语"),
    ("ko", "한국어"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("ru", "Русский"),
    ("ar", "العربية"),
    ("hi", "हिन्दी"),
    ("pt", "Português"),
    ("it", "Italiano"),
    ("th", "ไทย"),
    ("vi", "Tiếng Việt"),
];

/// Chinese display name for a language code, used in translation prompts.
/// Unknown codes pass through unchanged.
pub fn language_name(code: &str) -> &str {
    match code {
        "zh" => "中文",
        "zh-CN" => "简体中文",
        "zh-TW" => "繁体中文",
        "en" => "英文",
        "ja" => "日文",
        "ko" => "韩文",
        "fr" => "法文",
        "de" => "德文",
        "es" => "西班牙文",
        "ru" => "俄文",
        "ar" => "阿拉伯文",
        "hi" => "印地文",
        "pt" => "葡萄牙文",
        "it" => "意大利文",
        "th" => "泰文",
        "vi" => "越南文",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_chinese_names() {
        assert_eq!(language_name("en"), "英文");
        assert_eq!(language_name("zh-CN"), "简体中文");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(language_name("eo"), "eo");
    }
}
