//! 应用层错误定义
//!
//! 命令处理器只会因 Completion 失败而出错；书目检索失败在查询侧已降级，
//! 请求体校验在进入应用层之前完成。

use thiserror::Error;

use crate::application::ports::CompletionError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<CompletionError> for ApplicationError {
    fn from(err: CompletionError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}
