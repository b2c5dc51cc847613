use std::sync::Arc;

use fanyi_core::preprocess::{OcrPreprocessor, Preprocessor};
use fanyi_correct::CorrectClient;
use fanyi_translator::Translator;
use fanyi_tts::SpeechSynthesizer;
use fanyi_types::{AppEvent, TextSource};
use kanal::{AsyncReceiver, AsyncSender};

use crate::coordinator::AutoTranslateCoordinator;
use crate::state::AppState;

pub mod correction;
pub mod speak;

use correction::handle_request_correction;
use speak::handle_speak;

/// App's main loop: owns the coordinator, dispatches every event
/// sequentially. The awaits around RPC calls are the only suspension
/// points, so at most one translation is in flight per session.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    translator: Arc<dyn Translator>,
    correct_client: Arc<CorrectClient>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
) -> anyhow::Result<()> {
    let mut coordinator = {
        let config = state.config.read().await;
        AutoTranslateCoordinator::new(
            translator,
            ui_to_app_tx.clone(),
            app_to_ui_tx.clone(),
            &config,
        )
    };

    tracing::info!("event loop started, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        handle_event(
            &state,
            &mut coordinator,
            &correct_client,
            synthesizer.as_ref(),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_event(
    state: &Arc<AppState>,
    coordinator: &mut AutoTranslateCoordinator,
    correct_client: &CorrectClient,
    synthesizer: &dyn SpeechSynthesizer,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ConfigChanged => {
            let config = state.config.read().await;
            coordinator.update_settings(&config);
        }
        AppEvent::TextInput { text, source } => {
            tracing::debug!(chars = text.chars().count(), ?source, "text input");
            let text = match source {
                TextSource::Ocr => OcrPreprocessor.process(&text),
                TextSource::Typed => text,
            };
            coordinator.set_input(text, source).await;
        }
        AppEvent::SourceLangChanged(code) => {
            coordinator.set_source_lang(code).await;
        }
        AppEvent::TargetLangChanged(code) => {
            coordinator.set_target_lang(code).await;
        }
        AppEvent::TranslateNow { generation } => {
            coordinator.on_translate_now(generation).await;
        }
        AppEvent::ManualTranslate => {
            coordinator.manual_translate().await;
        }
        AppEvent::SwapLanguages => {
            coordinator.swap_languages();
        }
        AppEvent::RequestCorrection => {
            handle_request_correction(coordinator, correct_client, app_to_ui_tx).await?;
        }
        AppEvent::AcceptCorrection => {
            if coordinator.accept_correction() {
                let _ = app_to_ui_tx
                    .send(AppEvent::StatusUpdate {
                        status: "correction applied".to_string(),
                    })
                    .await;
            }
        }
        AppEvent::RejectCorrection => {
            coordinator.reject_correction();
        }
        AppEvent::Speak(target) => {
            let config = state.config.read().await;
            handle_speak(coordinator, synthesizer, &config.tts, app_to_ui_tx, target).await?;
        }
        AppEvent::StopSpeaking => {
            synthesizer.stop();
        }
        AppEvent::ShowTranslation(_)
        | AppEvent::ShowCorrection { .. }
        | AppEvent::StatusUpdate { .. }
        | AppEvent::ShowError(_) => {
            // Presenter-only events, ignore in the backend
        }
    }

    Ok(())
}
