//! Debounced auto-translate coordination.
//!
//! State machine: Idle -> Scheduled -> Translating -> Idle | error.
//! Text edits schedule a translation after a quiet window; language
//! selector changes fire immediately. Every new trigger cancels the
//! pending one. A generation counter stamps each schedule and each
//! issued request so that a timer firing (or a manual click racing a
//! pending timer) for superseded input is dropped instead of
//! overwriting newer state.

use std::sync::Arc;
use std::time::Duration;

use fanyi_config::Config;
use fanyi_core::language::{reconcile_from_detected, smart_target_language};
use fanyi_translator::{TranslateError, Translator};
use fanyi_types::{AppEvent, CorrectionResult, DisplayTranslation, TextSource, TranslationRequest};
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

/// Fixed rewrite for missing-credential failures
pub const API_KEY_REQUIRED_MSG: &str = "API key required. Configure your AI service first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Scheduled,
    Translating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    TextEdit,
    LanguageChange,
}

/// Per-session translation state, mirrored to the presenter on change
#[derive(Debug, Clone)]
pub struct Session {
    pub input_text: String,
    pub input_source: TextSource,
    pub output_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub detected_language: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct CoordinatorSettings {
    pub auto_translate: bool,
    pub auto_switch_lang: bool,
    pub debounce: Duration,
    pub max_input_chars: usize,
}

impl CoordinatorSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            auto_translate: config.service.auto_translate,
            auto_switch_lang: config.service.auto_switch_lang,
            debounce: Duration::from_millis(config.debounce_ms),
            max_input_chars: config.ui.max_input_chars,
        }
    }
}

pub struct AutoTranslateCoordinator {
    translator: Arc<dyn Translator>,
    /// Loopback into the event loop for deferred TranslateNow events
    event_tx: AsyncSender<AppEvent>,
    ui_tx: AsyncSender<AppEvent>,
    settings: CoordinatorSettings,
    session: Session,
    phase: Phase,
    generation: u64,
    pending: Option<CancellationToken>,
    pending_correction: Option<CorrectionResult>,
}

impl AutoTranslateCoordinator {
    pub fn new(
        translator: Arc<dyn Translator>,
        event_tx: AsyncSender<AppEvent>,
        ui_tx: AsyncSender<AppEvent>,
        config: &Config,
    ) -> Self {
        Self {
            translator,
            event_tx,
            ui_tx,
            settings: CoordinatorSettings::from_config(config),
            session: Session {
                input_text: String::new(),
                input_source: TextSource::Typed,
                output_text: String::new(),
                source_lang: config.ui.default_source_lang.clone(),
                target_lang: config.ui.default_target_lang.clone(),
                detected_language: String::new(),
                error: String::new(),
            },
            phase: Phase::Idle,
            generation: 0,
            pending: None,
            pending_correction: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn update_settings(&mut self, config: &Config) {
        self.settings = CoordinatorSettings::from_config(config);
    }

    /// New source text from typing or OCR. Typed text goes through the
    /// debounce; OCR text only smart-switches the target, translation of
    /// recognized text stays a manual action.
    pub async fn set_input(&mut self, text: String, source: TextSource) {
        let text = truncate_chars(text, self.settings.max_input_chars);
        self.session.input_text = text;
        self.session.input_source = source;
        self.pending_correction = None;

        match source {
            TextSource::Typed => self.schedule(Trigger::TextEdit).await,
            TextSource::Ocr => {
                if self.settings.auto_switch_lang && self.session.source_lang == "auto" {
                    let new_target = smart_target_language(
                        &self.session.input_text,
                        &self.session.target_lang,
                        &self.session.source_lang,
                        true,
                    );
                    if new_target != self.session.target_lang {
                        tracing::info!(lang = %new_target, "smart-switched target for OCR text");
                        self.session.target_lang = new_target;
                    }
                }
            }
        }
    }

    pub async fn set_source_lang(&mut self, code: String) {
        if code == self.session.source_lang {
            return;
        }
        self.session.source_lang = code;
        self.schedule(Trigger::LanguageChange).await;
    }

    pub async fn set_target_lang(&mut self, code: String) {
        if code == self.session.target_lang {
            return;
        }
        self.session.target_lang = code;
        self.schedule(Trigger::LanguageChange).await;
    }

    /// (Re)schedule a deferred translation. Language changes fire with
    /// zero delay, edits wait out the debounce window; either way the
    /// previous pending schedule is cancelled, never queued.
    async fn schedule(&mut self, trigger: Trigger) {
        self.cancel_pending();

        if !self.settings.auto_translate || self.session.input_text.trim().is_empty() {
            if self.phase == Phase::Scheduled {
                self.phase = Phase::Idle;
            }
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        let delay = match trigger {
            Trigger::LanguageChange => Duration::ZERO,
            Trigger::TextEdit => self.settings.debounce,
        };

        let cancel = CancellationToken::new();
        self.pending = Some(cancel.clone());
        self.phase = Phase::Scheduled;

        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = event_tx.send(AppEvent::TranslateNow { generation }).await;
                }
            }
        });
    }

    fn cancel_pending(&mut self) {
        if let Some(cancel) = self.pending.take() {
            cancel.cancel();
        }
    }

    /// A scheduled translation came due. Stale generations are dropped.
    pub async fn on_translate_now(&mut self, generation: u64) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale schedule");
            return;
        }
        if self.phase == Phase::Translating {
            tracing::debug!("translation already in flight, dropping schedule");
            return;
        }
        self.translate_current().await;
    }

    /// User-initiated translate, bypassing the debounce
    pub async fn manual_translate(&mut self) {
        if self.session.input_text.trim().is_empty() {
            return;
        }
        if self.phase == Phase::Translating {
            tracing::warn!("translation already in flight, ignoring manual trigger");
            return;
        }
        self.cancel_pending();
        self.generation += 1;
        self.translate_current().await;
    }

    async fn translate_current(&mut self) {
        self.phase = Phase::Translating;
        self.session.error.clear();

        let actual_target = smart_target_language(
            &self.session.input_text,
            &self.session.target_lang,
            &self.session.source_lang,
            self.settings.auto_switch_lang,
        );
        let request = TranslationRequest::new(
            self.session.input_text.clone(),
            self.session.source_lang.clone(),
            actual_target,
        );
        tracing::info!(
            id = %request.id,
            from = %request.source_lang,
            to = %request.target_lang,
            chars = request.text.chars().count(),
            "issuing translation request"
        );

        let outcome = self
            .translator
            .translate(&request.text, &request.source_lang, &request.target_lang)
            .await;

        match outcome {
            Ok(translation) => {
                self.session.output_text = translation.text.clone();

                if let Some(detected) = translation.detected_source_language {
                    self.session.detected_language = detected.clone();

                    if self.settings.auto_switch_lang && self.session.source_lang == "auto" {
                        self.session.target_lang = reconcile_from_detected(
                            &detected,
                            &self.session.target_lang,
                            true,
                        );
                    }
                    if self.session.source_lang == "auto" {
                        self.session.source_lang = detected;
                    }
                }

                let _ = self
                    .ui_tx
                    .send(AppEvent::ShowTranslation(DisplayTranslation {
                        text: translation.text,
                        from_lang: self.session.source_lang.clone(),
                        to_lang: self.session.target_lang.clone(),
                        service: translation.service,
                    }))
                    .await;
            }
            Err(e) => {
                self.session.error = user_message(&e);
                self.session.output_text.clear();
                tracing::warn!(error = %e, "translation failed");
                let _ = self
                    .ui_tx
                    .send(AppEvent::ShowError(self.session.error.clone()))
                    .await;
            }
        }

        self.phase = Phase::Idle;
    }

    /// Exchange languages and texts; undefined for an "auto" source
    pub fn swap_languages(&mut self) {
        if self.session.source_lang == "auto" {
            return;
        }
        std::mem::swap(&mut self.session.source_lang, &mut self.session.target_lang);
        std::mem::swap(&mut self.session.input_text, &mut self.session.output_text);
    }

    pub fn set_pending_correction(&mut self, result: CorrectionResult) {
        self.pending_correction = Some(result);
    }

    /// Accept the pending correction: the corrected text replaces the
    /// recognized text and the now-stale translation is cleared.
    pub fn accept_correction(&mut self) -> bool {
        let Some(result) = self.pending_correction.take() else {
            return false;
        };
        self.session.input_text = result.corrected_text;
        self.session.output_text.clear();
        true
    }

    pub fn reject_correction(&mut self) {
        self.pending_correction = None;
    }
}

fn user_message(error: &TranslateError) -> String {
    match error {
        TranslateError::MissingCredentials(_) => API_KEY_REQUIRED_MSG.to_string(),
        other => other.to_string(),
    }
}

fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            tracing::warn!(max_chars, "input text truncated");
            text[..byte_idx].to_string()
        }
        None => text,
    }
}
