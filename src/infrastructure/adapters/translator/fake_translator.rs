//! Fake Translator Client - 用于测试的翻译客户端
//!
//! 返回确定性的 "[lang] text" 译文，不实际调用翻译服务。
//! 可以配置指定语言失败，并记录调用顺序

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{
    TranslateRequest, TranslateResponse, TranslatorError, TranslatorPort,
};

/// Fake Translator Client 配置
#[derive(Debug, Clone, Default)]
pub struct FakeTranslatorConfig {
    /// 对这些语言的调用返回 ServiceError
    pub fail_languages: Vec<String>,
    /// 每次调用的模拟延迟（毫秒）
    pub delay_ms: u64,
}

/// Fake Translator Client
pub struct FakeTranslatorClient {
    config: FakeTranslatorConfig,
    /// 按调用顺序记录的目标语言
    calls: Mutex<Vec<String>>,
}

impl FakeTranslatorClient {
    pub fn new(config: FakeTranslatorConfig) -> Self {
        Self {
            config,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 全部成功的客户端
    pub fn succeeding() -> Self {
        Self::new(FakeTranslatorConfig::default())
    }

    /// 对指定语言失败的客户端
    pub fn failing_for(languages: &[&str]) -> Self {
        Self::new(FakeTranslatorConfig {
            fail_languages: languages.iter().map(|s| s.to_string()).collect(),
            delay_ms: 0,
        })
    }

    /// 已发生调用的目标语言，按调用顺序
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslatorPort for FakeTranslatorClient {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, TranslatorError> {
        self.calls
            .lock()
            .unwrap()
            .push(request.target_language.clone());

        if self.config.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.delay_ms)).await;
        }

        if self.config.fail_languages.contains(&request.target_language) {
            return Err(TranslatorError::ServiceError(format!(
                "fake failure for {}",
                request.target_language
            )));
        }

        Ok(TranslateResponse {
            translated_text: format!("[{}] {}", request.target_language, request.text),
            model: Some("fake".to_string()),
        })
    }
}
