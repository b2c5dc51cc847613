use std::time::Duration;

use fanyi_config::service::ServiceConfig;
use fanyi_core::names::language_name;
use serde::{Deserialize, Serialize};

use crate::parse::parse_translation_response;
use crate::{ProviderMetadata, TranslateError, Translation, Translator};

/// Translator backed by an OpenAI-compatible chat-completion endpoint
#[derive(Clone)]
pub struct ChatTranslator {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl ChatTranslator {
    pub fn new(config: ServiceConfig, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    fn check_credentials(&self) -> Result<(), TranslateError> {
        if self.config.api_key.is_empty() {
            return Err(TranslateError::MissingCredentials("API key"));
        }
        if self.config.api_url.is_empty() {
            return Err(TranslateError::MissingCredentials("API URL"));
        }
        Ok(())
    }
}

pub fn build_translation_prompt(text: &str, from: &str, to: &str) -> String {
    let target_name = language_name(to);

    if from == "auto" {
        format!(
            "请将以下文本翻译成{target_name}。请按以下格式返回结果：\n\n\
             检测语言: [检测到的源语言代码，如zh、en、ja等]\n\
             翻译结果: [翻译后的文本]\n\n\
             原文：\n{text}"
        )
    } else {
        let source_name = language_name(from);
        format!(
            "请将以下{source_name}文本翻译成{target_name}。请按以下格式返回结果：\n\n\
             检测语言: {from}\n\
             翻译结果: [翻译后的文本]\n\n\
             原文：\n{text}"
        )
    }
}

#[async_trait::async_trait]
impl Translator for ChatTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }
        self.check_credentials()?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_translation_prompt(text, from, to),
            }],
            temperature: 0.3,
            max_tokens: 2000,
            enable_web_search: self.config.enable_web_search.then_some(true),
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            401 => return Err(TranslateError::Authentication),
            429 => return Err(TranslateError::RateLimited),
            403 => return Err(TranslateError::AccessDenied),
            _ if !status.is_success() => {
                let detail = error_detail(response).await.unwrap_or_else(|| format!("HTTP {status}"));
                return Err(TranslateError::Provider {
                    provider: self.config.service_name.clone(),
                    detail,
                });
            }
            _ => {}
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|_| TranslateError::ResponseFormat)?;

        let content = body
            .choices
            .first()
            .map(|c| c.message.content.trim())
            .filter(|c| !c.is_empty())
            .ok_or(TranslateError::ResponseFormat)?;

        let (translated, detected) = parse_translation_response(content, from);
        tracing::debug!(
            chars = translated.chars().count(),
            detected = detected.as_deref().unwrap_or("-"),
            "translation received"
        );

        Ok(Translation {
            text: translated,
            detected_source_language: detected,
            service: self.config.service_name.to_lowercase(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.config.service_name.clone(),
            requires_api_key: true,
        }
    }
}

/// Provider error body, `{"error": {"message": ...}}` for OpenAI-compatible APIs
async fn error_detail(response: reqwest::Response) -> Option<String> {
    let body: serde_json::Value = response.json().await.ok()?;
    body["error"]["message"].as_str().map(str::to_string)
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_web_search: Option<bool>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator(api_key: &str) -> ChatTranslator {
        let config = ServiceConfig {
            api_key: api_key.to_string(),
            ..ServiceConfig::default()
        };
        ChatTranslator::new(config, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn empty_input_is_rejected_before_any_request() {
        let err = translator("key").translate("   ", "auto", "en").await;
        assert!(matches!(err, Err(TranslateError::EmptyInput)));
    }

    #[tokio::test]
    async fn missing_api_key_is_rejected_before_any_request() {
        let err = translator("").translate("hello", "auto", "en").await;
        assert!(matches!(
            err,
            Err(TranslateError::MissingCredentials("API key"))
        ));
    }

    #[test]
    fn auto_prompt_asks_for_detection() {
        let prompt = build_translation_prompt("hi", "auto", "zh-CN");
        assert!(prompt.contains("翻译成简体中文"));
        assert!(prompt.contains("检测语言: ["));
        assert!(prompt.ends_with("原文：\nhi"));
    }

    #[test]
    fn pinned_prompt_echoes_source_code() {
        let prompt = build_translation_prompt("你好", "zh-CN", "en");
        assert!(prompt.contains("简体中文文本翻译成英文"));
        assert!(prompt.contains("检测语言: zh-CN"));
    }
}
