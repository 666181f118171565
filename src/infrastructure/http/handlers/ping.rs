//! Root Handler
//!
//! 服务信息 / 健康检查端点

use axum::Json;
use serde::Serialize;

/// 服务信息响应
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// 根端点 - 服务信息
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Translation Service API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
