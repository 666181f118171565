//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /                           GET   服务信息
//! - /index                      GET   内置演示页面
//! - /translate                  POST  提交翻译任务（异步处理，立即返回）
//! - /translate/{task_id}        GET   查询任务详情
//! - /translate/content/{task_id} GET  查询任务详情（别名）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/index", get(handlers::index_page))
        .route("/translate", post(handlers::submit_translation))
        .route("/translate/:task_id", get(handlers::get_task))
        .route("/translate/content/:task_id", get(handlers::get_task_content))
}
