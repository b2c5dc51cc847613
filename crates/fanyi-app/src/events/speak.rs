use fanyi_config::tts::TtsConfig;
use fanyi_tts::{detect_text_language, SpeakOptions, SpeechSynthesizer};
use fanyi_types::{AppEvent, SpeakTarget};
use kanal::AsyncSender;

use crate::coordinator::AutoTranslateCoordinator;

/// Read the input or output text aloud. A second request while speaking
/// stops playback instead of starting another utterance.
pub async fn handle_speak(
    coordinator: &AutoTranslateCoordinator,
    synthesizer: &dyn SpeechSynthesizer,
    config: &TtsConfig,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    target: SpeakTarget,
) -> anyhow::Result<()> {
    let session = coordinator.session();

    let (text, lang) = match target {
        SpeakTarget::Input => {
            let lang = if session.source_lang == "auto" {
                if session.detected_language.is_empty() {
                    None
                } else {
                    Some(session.detected_language.clone())
                }
            } else {
                Some(session.source_lang.clone())
            };
            (session.input_text.clone(), lang)
        }
        SpeakTarget::Output => (session.output_text.clone(), Some(session.target_lang.clone())),
    };

    if text.trim().is_empty() {
        return Ok(());
    }

    let status = synthesizer.status();
    if status.is_speaking || status.is_paused {
        synthesizer.stop();
        return Ok(());
    }

    let language = match lang {
        Some(code) if code != "auto" => code,
        _ if config.auto_detect_lang => detect_text_language(&text).to_string(),
        _ => "en".to_string(),
    };

    let options = SpeakOptions {
        language: Some(language),
        ..SpeakOptions::from_config(config)
    }
    .clamped();

    if let Err(e) = synthesizer.speak(&text, &options).await {
        tracing::warn!(error = %e, "speech failed");
        app_to_ui_tx
            .send(AppEvent::ShowError(format!("speech failed: {e}")))
            .await?;
    }

    Ok(())
}
