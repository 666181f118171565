//! Task Context - 翻译任务限界上下文
//!
//! 职责:
//! - 翻译任务聚合管理
//! - pending -> completed 状态迁移
//! - 提交请求的合法性校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{TranslationTask, TaskStatus};
pub use errors::TaskError;
pub use value_objects::TaskId;
