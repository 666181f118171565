//! Task Queries

use crate::domain::task::TaskId;

/// 查询任务详情
///
/// 返回读取时刻的存储状态: 终态更新落库前看到 pending + 空 map，
/// 落库后看到 completed + 完整 map
#[derive(Debug, Clone, Copy)]
pub struct GetTask {
    pub task_id: TaskId,
}
