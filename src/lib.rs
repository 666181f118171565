//! Lingo - 异步多语言翻译任务服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Task Context: 翻译任务生命周期（pending -> completed）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TaskRepository, Translator）
//! - Commands: 提交翻译任务
//! - Queries: 查询任务详情
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Worker: TranslationRunner 后台翻译编排
//! - Persistence: SQLite 存储
//! - Adapters: Translator Client（OpenAI 兼容 / Fake）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
