pub mod types;

pub use types::{
    AppEvent, Correction, CorrectionResult, DisplayTranslation, SpeakTarget, TextSource,
    TranslationRequest,
};
