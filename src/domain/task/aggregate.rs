//! Task Context - Aggregate Root

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::{TaskError, TaskId};

/// 任务状态
///
/// 只有一条状态边: pending -> completed。
/// 不存在 failed / partial 状态——即使每个语言都翻译失败，
/// 任务仍然以 completed 结束，错误信息记录在对应语言槽位中。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// 等待后台翻译
    Pending,
    /// 终态更新已落库
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// TranslationTask 聚合根
///
/// 不变量:
/// - id / text / languages 创建后不可变
/// - status 单调: pending -> completed
/// - translations 整体替换，读取方只会看到空 map 或完整 map
#[derive(Debug, Clone)]
pub struct TranslationTask {
    id: TaskId,
    text: String,
    languages: Vec<String>,
    status: TaskStatus,
    translations: HashMap<String, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TranslationTask {
    /// 校验提交请求
    ///
    /// 语言列表允许重复条目——重复语言逐个处理，map 按 key 保留最后一次写入
    pub fn validate_submission(text: &str, languages: &[String]) -> Result<(), TaskError> {
        if text.trim().is_empty() {
            return Err(TaskError::EmptyText);
        }
        if languages.is_empty() {
            return Err(TaskError::NoLanguages);
        }
        Ok(())
    }

    /// 从持久化记录还原聚合
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TaskId,
        text: String,
        languages: Vec<String>,
        status: TaskStatus,
        translations: HashMap<String, String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            text,
            languages,
            status,
            translations,
            created_at,
            updated_at,
        }
    }

    /// 终态更新: 整体写入结果 map 并迁移到 completed
    ///
    /// 对已 completed 的任务再次调用会整体覆盖旧结果（last write wins），
    /// 调用方负责决定是否允许二次执行
    pub fn complete(&mut self, translations: HashMap<String, String>) {
        self.translations = translations;
        self.status = TaskStatus::Completed;
        self.updated_at = Utc::now();
    }

    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    // Getters
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn translations(&self) -> &HashMap<String, String> {
        &self.translations
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
