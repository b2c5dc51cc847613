use std::time::Duration;

use fanyi_config::service::ServiceConfig;
use fanyi_types::CorrectionResult;
use serde::{Deserialize, Serialize};

use crate::parse::parse_correction_response;
use crate::CorrectError;

const SYSTEM_PROMPT: &str = "你是一个专业的OCR文字修正助手。你的任务是识别和修正OCR扫描文字中的常见错误，\
                             包括字符识别错误、标点符号错误、格式错误等。请保持原文的语义和结构。";

/// One-shot OCR correction over a chat-completion endpoint
#[derive(Clone)]
pub struct CorrectClient {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl CorrectClient {
    pub fn new(config: ServiceConfig, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Send recognized text for correction and parse the reply.
    /// Errors surface to the user; nothing is retried.
    pub async fn correct_text(&self, ocr_text: &str) -> Result<CorrectionResult, CorrectError> {
        if ocr_text.trim().is_empty() {
            return Err(CorrectError::EmptyInput);
        }
        if self.config.api_key.is_empty() {
            return Err(CorrectError::MissingCredentials("API key"));
        }
        if self.config.api_url.is_empty() {
            return Err(CorrectError::MissingCredentials("API URL"));
        }

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_correction_prompt(ocr_text),
                },
            ],
            // Low temperature for consistent corrections
            temperature: 0.1,
            max_tokens: 3000,
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
            401 => return Err(CorrectError::Authentication),
            429 => return Err(CorrectError::RateLimited),
            403 => return Err(CorrectError::AccessDenied),
            _ if !status.is_success() => {
                let detail = error_detail(response)
                    .await
                    .unwrap_or_else(|| format!("HTTP {status}"));
                return Err(CorrectError::Provider {
                    provider: self.config.service_name.clone(),
                    detail,
                });
            }
            _ => {}
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|_| CorrectError::ResponseFormat)?;

        let content = body
            .choices
            .first()
            .map(|c| c.message.content.trim())
            .filter(|c| !c.is_empty())
            .ok_or(CorrectError::ResponseFormat)?;

        let result = parse_correction_response(content, ocr_text);
        tracing::debug!(
            confidence = result.confidence,
            corrections = result.corrections.len(),
            has_changes = result.has_changes,
            "correction parsed"
        );
        Ok(result)
    }
}

pub fn build_correction_prompt(ocr_text: &str) -> String {
    format!(
        "请修正以下OCR识别文本中可能存在的错误。常见的OCR错误包括：\n\n\
         1. 字符识别错误（如：l与I，0与O，m与rn等混淆）\n\
         2. 标点符号错误（如：。与·，，与'等）\n\
         3. 空格和换行问题\n\
         4. 中英文混合时的间距问题\n\
         5. 数字和字母的混淆\n\n\
         请按以下格式返回结果：\n\n\
         修正置信度: [1-10的数字，表示修正的必要性]\n\
         修正结果: [修正后的完整文本]\n\
         主要修正: [列出主要的修正点，格式：原文->修正文]\n\n\
         原始OCR文本：\n{ocr_text}"
    )
}

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

    fn client(api_key: &str) -> CorrectClient {
        let config = ServiceConfig {
            api_key: api_key.to_string(),
            ..ServiceConfig::default()
        };
        CorrectClient::new(config, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_any_request() {
        let err = client("key").correct_text("  \n ").await;
        assert!(matches!(err, Err(CorrectError::EmptyInput)));
    }

    #[tokio::test]
    async fn missing_key_is_rejected_before_any_request() {
        let err = client("").correct_text("some text").await;
        assert!(matches!(err, Err(CorrectError::MissingCredentials("API key"))));
    }

    #[test]
    fn prompt_embeds_the_ocr_text_and_format_labels() {
        let prompt = build_correction_prompt("Helo world");
        assert!(prompt.ends_with("原始OCR文本：\nHelo world"));
        assert!(prompt.contains("修正置信度:"));
        assert!(prompt.contains("主要修正:"));
    }
}
