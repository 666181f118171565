//! Page Handler
//!
//! 内置的演示页面，编译期嵌入

use axum::response::Html;

/// 演示页面
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/index.html"
    )))
}
