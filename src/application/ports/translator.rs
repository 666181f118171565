//! Translator Port - 翻译引擎抽象
//!
//! 定义外部翻译服务的抽象接口，具体实现在 infrastructure/adapters 层。
//! 对编排器而言这是一个不透明的、可能很慢也可能失败的远程调用

use async_trait::async_trait;
use thiserror::Error;

/// 翻译错误
///
/// 超时、拒绝、响应格式异常对调用方是同一类故障:
/// 按语言隔离、记录为错误标记后继续处理其余语言
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 翻译请求
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    /// 待翻译的原文
    pub text: String,
    /// 目标语言代码（如 "fr"、"es"）
    pub target_language: String,
}

/// 翻译响应
#[derive(Debug, Clone)]
pub struct TranslateResponse {
    /// 译文
    pub translated_text: String,
    /// 实际使用的模型（用于日志和追踪）
    pub model: Option<String>,
}

/// Translator Port
#[async_trait]
pub trait TranslatorPort: Send + Sync {
    /// 将文本翻译到单个目标语言
    async fn translate(&self, request: TranslateRequest)
        -> Result<TranslateResponse, TranslatorError>;

    /// 检查翻译服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
