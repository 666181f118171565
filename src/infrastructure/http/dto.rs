//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::task::TranslationTask;

/// 提交翻译任务请求
#[derive(Debug, Deserialize)]
pub struct TranslateRequestDto {
    /// 待翻译的原文
    pub text: String,
    /// 目标语言代码列表（如 ["fr", "es", "de"]）
    pub languages: Vec<String>,
}

/// 任务创建后的立即响应
///
/// translations 此时必然为空，结果需要后续轮询任务详情获取
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskPendingResponse {
    pub task_id: i64,
    pub status: String,
    pub translations: HashMap<String, String>,
}

impl From<&TranslationTask> for TaskPendingResponse {
    fn from(task: &TranslationTask) -> Self {
        Self {
            task_id: task.id().as_i64(),
            status: task.status().as_str().to_string(),
            translations: task.translations().clone(),
        }
    }
}

/// 任务完整详情
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskDetailResponse {
    pub id: i64,
    pub text: String,
    pub languages: Vec<String>,
    pub status: String,
    pub translations: HashMap<String, String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TranslationTask> for TaskDetailResponse {
    fn from(task: &TranslationTask) -> Self {
        Self {
            id: task.id().as_i64(),
            text: task.text().to_string(),
            languages: task.languages().to_vec(),
            status: task.status().as_str().to_string(),
            translations: task.translations().clone(),
            created_at: task.created_at().to_rfc3339(),
            updated_at: task.updated_at().to_rfc3339(),
        }
    }
}
