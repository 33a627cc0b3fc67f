//! Bookblurb - 书籍介绍 / 摘要生成服务
//!
//! 启动流程：.env → 配置 → 日志 → 上游客户端 → HTTP 服务器

use std::sync::Arc;

use bookblurb::config::{load_config, print_config, LogConfig};
use bookblurb::infrastructure::adapters::{
    GoogleBooksClient, GoogleBooksClientConfig, OpenAiClientConfig, OpenAiCompletionClient,
};
use bookblurb::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},bookblurb={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 只用于本地开发，不存在时忽略
    dotenv::dotenv().ok();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Bookblurb - 书籍介绍 / 摘要生成服务");
    print_config(&config);

    // 书目服务客户端
    let catalog_config = GoogleBooksClientConfig::new(&config.catalog.base_url)
        .with_api_key(&config.catalog.api_key)
        .with_timeout(config.catalog.timeout_secs);
    let catalog = Arc::new(GoogleBooksClient::new(catalog_config)?);

    // Completion 客户端
    let completion_config =
        OpenAiClientConfig::new(&config.completion.base_url, &config.completion.api_key)
            .with_model(&config.completion.model)
            .with_timeout(config.completion.timeout_secs);
    let completion = Arc::new(OpenAiCompletionClient::new(completion_config)?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(catalog, completion, &config.generation);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
