//! Application State
//!
//! 显式构造、显式注入的共享依赖，便于在测试中替换 fake 实现

use std::sync::Arc;

use crate::application::{
    GetTaskHandler, SubmitTranslationHandler, TaskRepositoryPort, TranslatorPort,
};
use crate::infrastructure::worker::TranslationRunner;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub task_repo: Arc<dyn TaskRepositoryPort>,
    pub translator: Arc<dyn TranslatorPort>,

    // ========== Worker ==========
    pub runner: Arc<TranslationRunner>,

    // ========== Command Handlers ==========
    pub submit_translation_handler: SubmitTranslationHandler,

    // ========== Query Handlers ==========
    pub get_task_handler: GetTaskHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        task_repo: Arc<dyn TaskRepositoryPort>,
        translator: Arc<dyn TranslatorPort>,
        runner: Arc<TranslationRunner>,
    ) -> Self {
        Self {
            task_repo: task_repo.clone(),
            translator,
            runner,
            submit_translation_handler: SubmitTranslationHandler::new(task_repo.clone()),
            get_task_handler: GetTaskHandler::new(task_repo),
        }
    }
}
