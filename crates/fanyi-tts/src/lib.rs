pub mod detect;
pub mod voice;

pub use detect::detect_text_language;
pub use voice::{best_voice_for_language, Voice};

use fanyi_config::tts::TtsConfig;

#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("speech synthesis not supported")]
    NotSupported,

    #[error("empty text")]
    EmptyText,

    #[error("synthesis error: {0}")]
    Synthesis(String),
}

/// Options for one speak call, derived from config plus per-call overrides
#[derive(Debug, Clone)]
pub struct SpeakOptions {
    /// Explicit language; None auto-detects from the text
    pub language: Option<String>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Negative index selects a voice from the language
    pub voice_index: i32,
}

impl SpeakOptions {
    pub fn from_config(config: &TtsConfig) -> Self {
        Self {
            language: None,
            rate: config.rate,
            pitch: config.pitch,
            volume: config.volume,
            voice_index: config.voice_index,
        }
    }

    /// Clamp parameters into the ranges speech backends accept
    pub fn clamped(mut self) -> Self {
        self.rate = self.rate.clamp(0.1, 10.0);
        self.pitch = self.pitch.clamp(0.0, 2.0);
        self.volume = self.volume.clamp(0.0, 1.0);
        self
    }
}

/// Synchronous status snapshot of a synthesizer
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthStatus {
    pub is_supported: bool,
    pub is_ready: bool,
    pub is_speaking: bool,
    pub is_paused: bool,
}

/// Speech synthesis backend seam. The actual voice service is a black
/// box behind this trait; the app only depends on the contract.
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak the text to completion. Stops any current utterance first.
    async fn speak(&self, text: &str, options: &SpeakOptions) -> Result<(), TtsError>;

    fn stop(&self);

    fn status(&self) -> SynthStatus;

    fn voices(&self) -> Vec<Voice>;
}

/// Backend for environments without a speech service
pub struct NullSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for NullSynthesizer {
    async fn speak(&self, text: &str, _options: &SpeakOptions) -> Result<(), TtsError> {
        if text.trim().is_empty() {
            return Err(TtsError::EmptyText);
        }
        Err(TtsError::NotSupported)
    }

    fn stop(&self) {}

    fn status(&self) -> SynthStatus {
        SynthStatus::default()
    }

    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speak_options_are_clamped_into_backend_ranges() {
        let options = SpeakOptions {
            language: None,
            rate: 99.0,
            pitch: -1.0,
            volume: 2.0,
            voice_index: -1,
        }
        .clamped();

        assert_eq!(options.rate, 10.0);
        assert_eq!(options.pitch, 0.0);
        assert_eq!(options.volume, 1.0);
    }
}
