//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TaskRepository、Translator）
//! - commands: 命令及处理器
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{handlers::SubmitTranslationHandler, SubmitTranslation};
pub use error::ApplicationError;
pub use ports::{
    RepositoryError, TaskRepositoryPort, TranslateRequest, TranslateResponse, TranslatorError,
    TranslatorPort,
};
pub use queries::{handlers::GetTaskHandler, GetTask};
