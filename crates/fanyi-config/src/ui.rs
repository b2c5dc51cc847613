use serde::{Deserialize, Serialize};

fn default_max_input_chars() -> usize {
    5000
}

fn default_default_source_lang() -> String {
    "auto".to_string()
}

fn default_default_target_lang() -> String {
    "zh-CN".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Input length cap enforced before scheduling a translation
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    #[serde(default = "default_default_source_lang")]
    pub default_source_lang: String,
    #[serde(default = "default_default_target_lang")]
    pub default_target_lang: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            default_source_lang: default_default_source_lang(),
            default_target_lang: default_default_target_lang(),
        }
    }
}
