use std::env;

use serde::{Deserialize, Serialize};

fn default_service_name() -> String {
    "OpenAI".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_auto_switch_lang() -> bool {
    true
}

fn default_auto_translate() -> bool {
    true
}

fn default_enable_web_search() -> bool {
    false
}

/// AI chat-completion service configuration, persisted as one record
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: String,
    /// Smart source/target language auto-switch
    #[serde(default = "default_auto_switch_lang")]
    pub auto_switch_lang: bool,
    /// Debounced translation on text edits
    #[serde(default = "default_auto_translate")]
    pub auto_translate: bool,
    #[serde(default = "default_enable_web_search")]
    pub enable_web_search: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            api_url: default_api_url(),
            model: default_model(),
            api_key: String::new(),
            auto_switch_lang: default_auto_switch_lang(),
            auto_translate: default_auto_translate(),
            enable_web_search: default_enable_web_search(),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        let api_key = env::var("FANYI_API_KEY").unwrap_or_default();
        let api_url = env::var("FANYI_API_URL").unwrap_or_else(|_| default_api_url());
        let model = env::var("FANYI_MODEL").unwrap_or_else(|_| default_model());

        Self {
            api_key,
            api_url,
            model,
            ..Self::default()
        }
    }
}
