//! Query Handlers

mod task_handlers;

pub use task_handlers::GetTaskHandler;
