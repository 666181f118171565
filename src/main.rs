//! Lingo - 异步多语言翻译任务服务
//!
//! 架构:
//! - Domain: task/ (任务生命周期)
//! - Application: commands, queries, ports
//! - Infrastructure: http, worker, persistence, adapters

use std::sync::Arc;

use lingo::config::{load_config, print_config};
use lingo::infrastructure::adapters::{HttpTranslatorClient, HttpTranslatorClientConfig};
use lingo::infrastructure::http::{AppState, HttpServer, ServerConfig};
use lingo::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteTaskRepository,
};
use lingo::infrastructure::worker::{TranslationRunner, TranslationRunnerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},lingo={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Lingo - 异步翻译任务服务");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let task_repo = Arc::new(SqliteTaskRepository::new(pool.clone()));

    // 创建翻译引擎客户端
    let translator_config = HttpTranslatorClientConfig {
        api_base: config.translator.api_base.clone(),
        api_key: config.translator.api_key.clone(),
        model: config.translator.model.clone(),
        timeout_secs: config.translator.timeout_secs,
        temperature: config.translator.temperature,
    };
    let translator = Arc::new(
        HttpTranslatorClient::new(translator_config)
            .map_err(|e| anyhow::anyhow!("Failed to create translator client: {}", e))?,
    );

    // 创建翻译编排器（每个任务一次 tokio::spawn，由 HTTP 层派发）
    let runner = Arc::new(TranslationRunner::new(
        TranslationRunnerConfig {
            pacing_ms: config.translator.pacing_ms,
        },
        translator.clone(),
        task_repo.clone(),
    ));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(task_repo, translator, runner);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
