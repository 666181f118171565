//! Application Commands - 命令及处理器

pub mod handlers;
mod task_commands;

pub use task_commands::SubmitTranslation;
