//! Completion Port - 大模型文本生成抽象

use async_trait::async_trait;
use thiserror::Error;

/// Completion 错误
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Completion Port
///
/// 外部 Completion 服务的抽象接口。失败不在本地兜底，直接返回给调用方。
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// 发送单条 user 消息，返回第一个 choice 的文本；没有 choice 时返回空串
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
