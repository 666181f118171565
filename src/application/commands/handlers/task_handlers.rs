//! Task Command Handlers

use std::sync::Arc;

use crate::application::commands::SubmitTranslation;
use crate::application::ports::TaskRepositoryPort;
use crate::application::ApplicationError;
use crate::domain::task::TranslationTask;

/// 提交翻译任务处理器
///
/// 只负责校验与落库。后台翻译的调度由 HTTP 层在落库成功后触发，
/// 保证请求在任何翻译工作开始之前即可返回
pub struct SubmitTranslationHandler {
    task_repo: Arc<dyn TaskRepositoryPort>,
}

impl SubmitTranslationHandler {
    pub fn new(task_repo: Arc<dyn TaskRepositoryPort>) -> Self {
        Self { task_repo }
    }

    pub async fn handle(
        &self,
        command: SubmitTranslation,
    ) -> Result<TranslationTask, ApplicationError> {
        TranslationTask::validate_submission(&command.text, &command.languages)?;

        let task = self
            .task_repo
            .create(&command.text, &command.languages)
            .await?;

        tracing::info!(
            task_id = %task.id(),
            languages = task.languages().len(),
            text_len = task.text().len(),
            "Translation task created"
        );

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::TaskStatus;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTaskRepository,
    };

    async fn make_handler() -> SubmitTranslationHandler {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SubmitTranslationHandler::new(Arc::new(SqliteTaskRepository::new(pool)))
    }

    #[tokio::test]
    async fn test_submit_creates_pending_task() {
        let handler = make_handler().await;
        let task = handler
            .handle(SubmitTranslation {
                text: "Hello".to_string(),
                languages: vec!["fr".to_string(), "es".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(task.status(), TaskStatus::Pending);
        assert!(task.translations().is_empty());
        assert_eq!(task.languages(), ["fr", "es"]);
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_languages() {
        let handler = make_handler().await;
        let result = handler
            .handle(SubmitTranslation {
                text: "Hello".to_string(),
                languages: vec![],
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_text() {
        let handler = make_handler().await;
        let result = handler
            .handle(SubmitTranslation {
                text: "  ".to_string(),
                languages: vec!["fr".to_string()],
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }
}
