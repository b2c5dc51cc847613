use std::env;

use serde::{Deserialize, Serialize};

use self::service::ServiceConfig;
use self::tts::TtsConfig;
use self::ui::UiConfig;

pub mod service;
pub mod tts;
pub mod ui;

fn default_debounce_ms() -> u64 {
    2000
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub tts: TtsConfig,
    pub ui: UiConfig,

    /// Quiet window before an auto-translate fires on text edits
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// HTTP timeout for chat-completion calls
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            tts: TtsConfig::default(),
            ui: UiConfig::default(),
            debounce_ms: default_debounce_ms(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let debounce_ms = env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_debounce_ms);

        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Config {
            service: ServiceConfig::new(),
            tts: TtsConfig::default(),
            ui: UiConfig::default(),
            debounce_ms,
            timeout_seconds,
        }
    }
}
