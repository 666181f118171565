//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Task Context: 翻译任务生命周期管理

pub mod task;
