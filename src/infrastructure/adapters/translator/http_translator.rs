//! HTTP Translator Client - 调用 OpenAI 兼容的翻译服务
//!
//! 实现 TranslatorPort trait，通过 chat completions 接口翻译文本
//!
//! 外部 API:
//! POST {api_base}/chat/completions
//! Request: {"model": "...", "messages": [...], "temperature": 0.2}  (JSON)
//! Response: {"choices": [{"message": {"content": "..."}}], ...}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    TranslateRequest, TranslateResponse, TranslatorError, TranslatorPort,
};

/// Chat completions 请求体 (JSON)
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Chat completions 响应体 (JSON)
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// HTTP Translator 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTranslatorClientConfig {
    /// 翻译服务基础 URL（OpenAI 兼容）
    pub api_base: String,
    /// API Key
    pub api_key: String,
    /// 模型名
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 采样温度，低温度保证译文稳定、贴近原文
    pub temperature: f32,
}

impl Default for HttpTranslatorClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 60,
            temperature: 0.2,
        }
    }
}

impl HttpTranslatorClientConfig {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Translator 客户端
///
/// 通过 HTTP 调用外部翻译服务，每次调用翻译一个目标语言
pub struct HttpTranslatorClient {
    client: Client,
    config: HttpTranslatorClientConfig,
}

impl HttpTranslatorClient {
    /// 创建新的 HTTP Translator 客户端
    pub fn new(config: HttpTranslatorClientConfig) -> Result<Self, TranslatorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslatorError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取 completions URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.api_base)
    }

    /// 获取模型列表 URL（用于健康检查）
    fn models_url(&self) -> String {
        format!("{}/models", self.config.api_base)
    }

    fn build_prompt(request: &TranslateRequest) -> String {
        format!(
            "Translate the following text to {}. \
             Only return the translation, no explanations.\n\n{}",
            request.target_language, request.text
        )
    }
}

#[async_trait]
impl TranslatorPort for HttpTranslatorClient {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, TranslatorError> {
        let http_request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a professional translator.".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: Self::build_prompt(&request),
                },
            ],
            temperature: self.config.temperature,
        };

        tracing::debug!(
            url = %self.completions_url(),
            target_language = %request.target_language,
            text_len = request.text.len(),
            "Sending translate request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslatorError::Timeout
                } else if e.is_connect() {
                    TranslatorError::NetworkError(format!(
                        "Cannot connect to translation service: {}",
                        e
                    ))
                } else {
                    TranslatorError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslatorError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TranslatorError::InvalidResponse(e.to_string()))?;

        let translated_text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                TranslatorError::InvalidResponse("empty translation in response".to_string())
            })?;

        tracing::info!(
            target_language = %request.target_language,
            model = ?body.model,
            translated_len = translated_text.len(),
            "Translation completed"
        );

        Ok(TranslateResponse {
            translated_text,
            model: body.model,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.models_url())
            .bearer_auth(&self.config.api_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpTranslatorClientConfig::default();
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTranslatorClientConfig::new("http://localhost:11434/v1", "sk-test")
            .with_model("llama3")
            .with_timeout(30);
        assert_eq!(config.api_base, "http://localhost:11434/v1");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_prompt_contains_language_and_text() {
        let prompt = HttpTranslatorClient::build_prompt(&TranslateRequest {
            text: "Hello".to_string(),
            target_language: "fr".to_string(),
        });
        assert!(prompt.contains("to fr"));
        assert!(prompt.ends_with("Hello"));
    }
}
