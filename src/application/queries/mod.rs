//! Application Queries - 查询及处理器

pub mod handlers;
mod task_queries;

pub use task_queries::GetTask;
