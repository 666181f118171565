//! Repository Ports - 出站端口
//!
//! 定义任务持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::task::{TaskId, TranslationTask};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Task Repository Port
///
/// 任务记录是系统中唯一的共享可变资源。实现必须保证单条记录的
/// 并发 create / find / complete 之间不会出现撕裂读:
/// 读取方看到的要么是更新前的完整记录，要么是更新后的完整记录
#[async_trait]
pub trait TaskRepositoryPort: Send + Sync {
    /// 创建任务
    ///
    /// 分配唯一自增 id，落库状态为 pending、结果 map 为空，
    /// 返回包含已分配 id 的完整记录。插入要么整体成功要么整体失败，
    /// 其他读取方不会看到半成品记录
    async fn create(
        &self,
        text: &str,
        languages: &[String],
    ) -> Result<TranslationTask, RepositoryError>;

    /// 根据 ID 查找任务
    ///
    /// 未知 id 返回 None，不属于错误
    async fn find_by_id(&self, id: TaskId) -> Result<Option<TranslationTask>, RepositoryError>;

    /// 终态更新
    ///
    /// 在一次原子写入中整体替换 translations 并把 status 置为 completed，
    /// 返回更新后的记录。未知 id 返回 NotFound。
    /// 对已 completed 的任务重复调用会覆盖旧结果（last write wins）
    async fn complete(
        &self,
        id: TaskId,
        translations: HashMap<String, String>,
    ) -> Result<TranslationTask, RepositoryError>;
}
