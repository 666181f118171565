//! Worker Layer - 后台任务执行

mod translation_runner;

pub use translation_runner::{TranslationRunner, TranslationRunnerConfig};
