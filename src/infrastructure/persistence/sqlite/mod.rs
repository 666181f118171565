//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod task_repo;

pub use database::*;
pub use task_repo::*;
