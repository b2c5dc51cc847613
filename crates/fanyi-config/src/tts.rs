use serde::{Deserialize, Serialize};

fn default_rate() -> f32 {
    1.0
}

fn default_pitch() -> f32 {
    1.0
}

fn default_volume() -> f32 {
    1.0
}

fn default_voice_index() -> i32 {
    -1
}

fn default_auto_detect_lang() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TtsConfig {
    /// Speaking rate (0.1 - 10)
    #[serde(default = "default_rate")]
    pub rate: f32,
    /// Pitch (0 - 2)
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    /// Volume (0 - 1)
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// -1 selects a voice automatically from the text language
    #[serde(default = "default_voice_index")]
    pub voice_index: i32,
    #[serde(default = "default_auto_detect_lang")]
    pub auto_detect_lang: bool,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            pitch: default_pitch(),
            volume: default_volume(),
            voice_index: default_voice_index(),
            auto_detect_lang: default_auto_detect_lang(),
        }
    }
}
