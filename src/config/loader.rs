//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{mask_secret, AppConfig};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 兼容旧部署的密钥环境变量
const LEGACY_CATALOG_KEY: &str = "GOOGLE_KEY";
const LEGACY_COMPLETION_KEY: &str = "OPENAI_KEY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `BOOKBLURB_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// 未配置的 API Key 会回退读取 `GOOGLE_KEY` / `OPENAI_KEY`。
///
/// # 环境变量示例
/// - `BOOKBLURB_SERVER__PORT=8080`
/// - `BOOKBLURB_COMPLETION__API_KEY=sk-...`
/// - `BOOKBLURB_COMPLETION__MODEL=gpt-4o`
/// - `BOOKBLURB_GENERATION__CONCURRENT_ALL=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("catalog.base_url", "https://www.googleapis.com/books/v1")?
        .set_default("catalog.api_key", "")?
        .set_default("catalog.timeout_secs", 10)?
        .set_default("completion.base_url", "https://api.openai.com/v1")?
        .set_default("completion.api_key", "")?
        .set_default("completion.model", "gpt-4o-mini")?
        .set_default("completion.timeout_secs", 60)?
        .set_default("generation.max_sentences", 10)?
        .set_default("generation.concurrent_all", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: BOOKBLURB_COMPLETION__MODEL=gpt-4o
    builder = builder.add_source(
        Environment::with_prefix("BOOKBLURB")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    apply_legacy_secrets(&mut app_config, |name| std::env::var(name).ok());

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 用旧的环境变量填充未设置的 API Key
fn apply_legacy_secrets(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if config.catalog.api_key.is_empty() {
        if let Some(key) = lookup(LEGACY_CATALOG_KEY) {
            config.catalog.api_key = key;
        }
    }
    if config.completion.api_key.is_empty() {
        if let Some(key) = lookup(LEGACY_COMPLETION_KEY) {
            config.completion.api_key = key;
        }
    }
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.catalog.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Catalog URL cannot be empty".to_string(),
        ));
    }

    if config.completion.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Completion URL cannot be empty".to_string(),
        ));
    }

    if config.completion.api_key.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "Completion API key is not set (use BOOKBLURB_COMPLETION__API_KEY or {})",
            LEGACY_COMPLETION_KEY
        )));
    }

    if config.completion.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "Completion model cannot be empty".to_string(),
        ));
    }

    if config.catalog.timeout_secs == 0 || config.completion.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Upstream timeouts must be at least 1 second".to_string(),
        ));
    }

    if config.generation.max_sentences == 0 {
        return Err(ConfigError::ValidationError(
            "generation.max_sentences must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Catalog URL: {}", config.catalog.base_url);
    tracing::info!("Catalog Key: {}", mask_secret(&config.catalog.api_key));
    tracing::info!("Catalog Timeout: {}s", config.catalog.timeout_secs);
    tracing::info!("Completion URL: {}", config.completion.base_url);
    tracing::info!("Completion Key: {}", mask_secret(&config.completion.api_key));
    tracing::info!("Completion Model: {}", config.completion.model);
    tracing::info!("Completion Timeout: {}s", config.completion.timeout_secs);
    tracing::info!("Max Sentences: {}", config.generation.max_sentences);
    tracing::info!("Concurrent /generate/all: {}", config.generation.concurrent_all);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.completion.api_key = "sk-test".to_string();
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_completion_key() {
        let config = AppConfig::default();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("OPENAI_KEY"));
    }

    #[test]
    fn test_validation_error_for_zero_max_sentences() {
        let mut config = valid_config();
        config.generation.max_sentences = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = valid_config();
        config.catalog.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_legacy_secrets_fill_unset_keys() {
        let mut config = AppConfig::default();
        apply_legacy_secrets(&mut config, |name| match name {
            "GOOGLE_KEY" => Some("g-key".to_string()),
            "OPENAI_KEY" => Some("o-key".to_string()),
            _ => None,
        });
        assert_eq!(config.catalog.api_key, "g-key");
        assert_eq!(config.completion.api_key, "o-key");
    }

    #[test]
    fn test_legacy_secrets_do_not_override_configured_keys() {
        let mut config = valid_config();
        apply_legacy_secrets(&mut config, |_| Some("legacy".to_string()));
        assert_eq!(config.completion.api_key, "sk-test");
        assert_eq!(config.catalog.api_key, "legacy");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8088

[completion]
api_key = "sk-from-file"
model = "gpt-4o"

[generation]
max_sentences = 5
concurrent_all = true
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.completion.api_key, "sk-from-file");
        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.generation.max_sentences, 5);
        assert!(config.generation.concurrent_all);
        assert_eq!(config.catalog.timeout_secs, 10);
    }
}
