//! SQLite Task Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::collections::HashMap;

use super::DbPool;
use crate::application::ports::{RepositoryError, TaskRepositoryPort};
use crate::domain::task::{TaskId, TaskStatus, TranslationTask};

/// SQLite Task Repository
pub struct SqliteTaskRepository {
    pool: DbPool,
}

impl SqliteTaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: TaskId) -> Result<Option<TaskRow>, RepositoryError> {
        sqlx::query_as(
            "SELECT id, text, languages, status, translations, created_at, updated_at \
             FROM translation_tasks WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }
}

#[derive(FromRow)]
struct TaskRow {
    id: i64,
    text: String,
    languages: String,
    status: String,
    translations: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<TaskRow> for TranslationTask {
    type Error = RepositoryError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let languages: Vec<String> = serde_json::from_str(&row.languages)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let translations: HashMap<String, String> = serde_json::from_str(&row.translations)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let status = TaskStatus::from_str(&row.status)
            .ok_or_else(|| RepositoryError::SerializationError(format!("bad status: {}", row.status)))?;

        Ok(TranslationTask::restore(
            TaskId::new(row.id),
            row.text,
            languages,
            status,
            translations,
            DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
            DateTime::parse_from_rfc3339(&row.updated_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        ))
    }
}

#[async_trait]
impl TaskRepositoryPort for SqliteTaskRepository {
    async fn create(
        &self,
        text: &str,
        languages: &[String],
    ) -> Result<TranslationTask, RepositoryError> {
        let languages_json = serde_json::to_string(languages)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO translation_tasks (text, languages, status, translations, created_at, updated_at)
            VALUES (?, ?, 'pending', '{}', ?, ?)
            "#,
        )
        .bind(text)
        .bind(&languages_json)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let id = TaskId::new(result.last_insert_rowid());

        // 回读落库后的完整记录（含分配的 id）
        let row = self.fetch_by_id(id).await?.ok_or_else(|| {
            RepositoryError::DatabaseError(format!("inserted task {} not visible", id))
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<TranslationTask>, RepositoryError> {
        self.fetch_by_id(id).await?.map(TranslationTask::try_from).transpose()
    }

    async fn complete(
        &self,
        id: TaskId,
        translations: HashMap<String, String>,
    ) -> Result<TranslationTask, RepositoryError> {
        let row = self
            .fetch_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound(id))?;

        let mut task: TranslationTask = row.try_into()?;
        if !task.is_pending() {
            tracing::warn!(
                task_id = %id,
                "Completing an already completed task, previous results are overwritten"
            );
        }
        task.complete(translations);

        let translations_json = serde_json::to_string(task.translations())
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        // 单条 UPDATE，status 与 translations 原子落库
        sqlx::query(
            r#"
            UPDATE translation_tasks
            SET translations = ?, status = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&translations_json)
        .bind(task.status().as_str())
        .bind(task.updated_at().to_rfc3339())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn make_repo() -> SqliteTaskRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteTaskRepository::new(pool)
    }

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_create_returns_pending_task_with_fresh_id() {
        let repo = make_repo().await;

        let first = repo.create("Hello", &langs(&["fr", "es"])).await.unwrap();
        let second = repo.create("World", &langs(&["de"])).await.unwrap();

        assert_eq!(first.status(), TaskStatus::Pending);
        assert!(first.translations().is_empty());
        assert_eq!(first.text(), "Hello");
        assert_eq!(first.languages(), ["fr", "es"]);
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = make_repo().await;
        let found = repo.find_by_id(TaskId::new(123)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_reads_are_idempotent() {
        let repo = make_repo().await;
        let created = repo.create("Hello", &langs(&["fr"])).await.unwrap();

        let a = repo.find_by_id(created.id()).await.unwrap().unwrap();
        let b = repo.find_by_id(created.id()).await.unwrap().unwrap();

        assert_eq!(a.text(), b.text());
        assert_eq!(a.status(), b.status());
        assert_eq!(a.translations(), b.translations());
        assert_eq!(a.updated_at(), b.updated_at());
    }

    #[tokio::test]
    async fn test_complete_writes_terminal_state() {
        let repo = make_repo().await;
        let created = repo.create("Hello", &langs(&["fr", "es"])).await.unwrap();

        let mut results = HashMap::new();
        results.insert("fr".to_string(), "Bonjour".to_string());
        results.insert("es".to_string(), "Hola".to_string());

        let updated = repo.complete(created.id(), results).await.unwrap();
        assert_eq!(updated.status(), TaskStatus::Completed);

        let fetched = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(fetched.status(), TaskStatus::Completed);
        assert_eq!(fetched.translations()["fr"], "Bonjour");
        assert_eq!(fetched.translations()["es"], "Hola");
        // 不可变字段保持不变
        assert_eq!(fetched.text(), "Hello");
        assert_eq!(fetched.languages(), ["fr", "es"]);
    }

    #[tokio::test]
    async fn test_complete_missing_task_is_not_found() {
        let repo = make_repo().await;
        let result = repo.complete(TaskId::new(77), HashMap::new()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_second_complete_overwrites() {
        let repo = make_repo().await;
        let created = repo.create("Hello", &langs(&["fr"])).await.unwrap();

        let mut first = HashMap::new();
        first.insert("fr".to_string(), "Bonjour".to_string());
        repo.complete(created.id(), first).await.unwrap();

        let mut second = HashMap::new();
        second.insert("fr".to_string(), "Salut".to_string());
        repo.complete(created.id(), second).await.unwrap();

        let fetched = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(fetched.status(), TaskStatus::Completed);
        assert_eq!(fetched.translations()["fr"], "Salut");
    }
}
