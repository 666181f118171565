//! Translate HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetTask, SubmitTranslation};
use crate::domain::task::TaskId;
use crate::infrastructure::http::dto::{TaskDetailResponse, TaskPendingResponse, TranslateRequestDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 提交翻译任务
///
/// 先创建 pending 记录，落库成功后把翻译工作派发到后台执行，
/// 请求在任何翻译调用发生之前返回
pub async fn submit_translation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranslateRequestDto>,
) -> Result<Json<TaskPendingResponse>, ApiError> {
    let task = state
        .submit_translation_handler
        .handle(SubmitTranslation {
            text: req.text.clone(),
            languages: req.languages.clone(),
        })
        .await?;

    // Fire-and-forget: 请求不等待翻译完成
    tokio::spawn(state.runner.clone().run(task.id(), req.text, req.languages));

    Ok(Json(TaskPendingResponse::from(&task)))
}

/// 查询任务详情
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i64>,
) -> Result<Json<TaskDetailResponse>, ApiError> {
    let task = state
        .get_task_handler
        .handle(GetTask {
            task_id: TaskId::new(task_id),
        })
        .await?;

    Ok(Json(TaskDetailResponse::from(&task)))
}

/// 查询任务详情（/translate/content/{task_id} 别名）
pub async fn get_task_content(
    state: State<Arc<AppState>>,
    task_id: Path<i64>,
) -> Result<Json<TaskDetailResponse>, ApiError> {
    get_task(state, task_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::time::Duration;
    use tower::util::ServiceExt;

    use crate::infrastructure::adapters::translator::FakeTranslatorClient;
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTaskRepository,
    };
    use crate::infrastructure::worker::{TranslationRunner, TranslationRunnerConfig};

    async fn make_app(translator: Arc<FakeTranslatorClient>) -> axum::Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let task_repo = Arc::new(SqliteTaskRepository::new(pool));

        let runner = Arc::new(TranslationRunner::new(
            TranslationRunnerConfig { pacing_ms: 0 },
            translator.clone(),
            task_repo.clone(),
        ));

        let state = AppState::new(task_repo, translator, runner);
        create_routes().with_state(Arc::new(state))
    }

    fn post_translate(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/translate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submit_returns_pending_immediately() {
        let app = make_app(Arc::new(FakeTranslatorClient::succeeding())).await;

        let response = app
            .oneshot(post_translate(r#"{"text":"Hello","languages":["fr","es"]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "pending");
        assert!(body["task_id"].as_i64().unwrap() >= 1);
        assert_eq!(body["translations"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_language_list() {
        let app = make_app(Arc::new(FakeTranslatorClient::succeeding())).await;

        let response = app
            .oneshot(post_translate(r#"{"text":"Hello","languages":[]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_missing_task_returns_404() {
        let app = make_app(Arc::new(FakeTranslatorClient::succeeding())).await;

        let request = Request::builder()
            .uri("/translate/999")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// 完整场景: 提交 -> pending -> 后台完成 -> completed + 结果 map
    #[tokio::test]
    async fn test_submit_then_poll_until_completed() {
        let translator = Arc::new(FakeTranslatorClient::failing_for(&["es"]));
        let app = make_app(translator).await;

        let response = app
            .clone()
            .oneshot(post_translate(r#"{"text":"Hello","languages":["fr","es"]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let task_id = body_json(response).await["task_id"].as_i64().unwrap();

        // 轮询直到后台任务落库
        let mut task = serde_json::Value::Null;
        for _ in 0..100 {
            let request = Request::builder()
                .uri(format!("/translate/{}", task_id))
                .body(Body::empty())
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            task = body_json(response).await;
            if task["status"] == "completed" {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert_eq!(task["status"], "completed");
        assert_eq!(task["text"], "Hello");
        assert_eq!(task["languages"], serde_json::json!(["fr", "es"]));
        assert_eq!(task["translations"]["fr"], "[fr] Hello");
        assert!(task["translations"]["es"]
            .as_str()
            .unwrap()
            .starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_content_alias_matches_detail_endpoint() {
        let app = make_app(Arc::new(FakeTranslatorClient::succeeding())).await;

        let response = app
            .clone()
            .oneshot(post_translate(r#"{"text":"Hi","languages":["de"]}"#))
            .await
            .unwrap();
        let task_id = body_json(response).await["task_id"].as_i64().unwrap();

        for uri in [
            format!("/translate/{}", task_id),
            format!("/translate/content/{}", task_id),
        ] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let body = body_json(response).await;
            assert_eq!(body["id"].as_i64().unwrap(), task_id);
            assert_eq!(body["text"], "Hi");
        }
    }
}
