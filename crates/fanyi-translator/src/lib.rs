pub mod chat;
pub mod parse;

pub use chat::ChatTranslator;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language.
    /// `from` may be "auto", in which case the provider detects the source.
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    /// Source language the provider reports having translated from
    pub detected_source_language: Option<String>,
    pub service: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

/// Fixed error taxonomy, all user-facing, none retried
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("{0} required")]
    MissingCredentials(&'static str),

    #[error("empty input text")]
    EmptyInput,

    #[error("invalid API key")]
    Authentication,

    #[error("rate limited, try again later")]
    RateLimited,

    #[error("access denied")]
    AccessDenied,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service returned no usable content")]
    ResponseFormat,

    #[error("{provider} API error: {detail}")]
    Provider { provider: String, detail: String },
}
