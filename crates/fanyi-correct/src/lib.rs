pub mod client;
pub mod parse;

pub use client::CorrectClient;
pub use parse::parse_correction_response;

/// Fixed error taxonomy for the correction round trip
#[derive(Debug, thiserror::Error)]
pub enum CorrectError {
    #[error("{0} required")]
    MissingCredentials(&'static str),

    #[error("empty OCR text")]
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
