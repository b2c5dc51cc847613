use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a piece of source text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    Typed,
    Ocr,
}

/// One translation request, immutable once issued
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub id: Uuid,
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(text: String, source_lang: String, target_lang: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            source_lang,
            target_lang,
        }
    }
}

/// A single (original, corrected) span claimed by the correction model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
}

/// Outcome of one OCR correction round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionResult {
    pub corrected_text: String,
    /// 0-10, self-reported by the model
    pub confidence: u8,
    pub corrections: Vec<Correction>,
    pub has_changes: bool,
}

/// Translation result shaped for display
#[derive(Debug, Clone)]
pub struct DisplayTranslation {
    pub text: String,
    pub from_lang: String,
    pub to_lang: String,
    pub service: String,
}

/// Which side of the session to read aloud
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakTarget {
    Input,
    Output,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    /// Source text changed (typing or OCR output)
    TextInput {
        text: String,
        source: TextSource,
    },
    SourceLangChanged(String),
    TargetLangChanged(String),
    /// Fired by the debounce timer; stale generations are dropped
    TranslateNow {
        generation: u64,
    },
    ManualTranslate,
    SwapLanguages,
    RequestCorrection,
    AcceptCorrection,
    RejectCorrection,
    Speak(SpeakTarget),
    StopSpeaking,
    ShowTranslation(DisplayTranslation),
    /// Correction review: the original text plus the parsed result,
    /// enough for the presenter to render both diff sides
    ShowCorrection {
        original: String,
        result: CorrectionResult,
    },
    StatusUpdate {
        status: String,
    },
    ShowError(String),
}
