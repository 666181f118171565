//! Task Query Handlers

use std::sync::Arc;

use crate::application::ports::TaskRepositoryPort;
use crate::application::queries::GetTask;
use crate::application::ApplicationError;
use crate::domain::task::TranslationTask;

/// 查询任务处理器
pub struct GetTaskHandler {
    task_repo: Arc<dyn TaskRepositoryPort>,
}

impl GetTaskHandler {
    pub fn new(task_repo: Arc<dyn TaskRepositoryPort>) -> Self {
        Self { task_repo }
    }

    pub async fn handle(&self, query: GetTask) -> Result<TranslationTask, ApplicationError> {
        self.task_repo
            .find_by_id(query.task_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Task", query.task_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::TaskId;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTaskRepository,
    };

    #[tokio::test]
    async fn test_get_missing_task_is_not_found() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let handler = GetTaskHandler::new(Arc::new(SqliteTaskRepository::new(pool)));

        let result = handler
            .handle(GetTask {
                task_id: TaskId::new(999),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }
}
