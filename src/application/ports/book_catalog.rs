//! Book Catalog Port - 书目元数据检索抽象
//!
//! 具体实现在 infrastructure/adapters/catalog

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::BookQuery;

/// 书目检索错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Book Catalog Port
///
/// 外部书目服务的抽象接口
#[async_trait]
pub trait BookCatalogPort: Send + Sync {
    /// 检索第一条匹配结果的描述
    ///
    /// - `Ok(Some(_))`: 命中且有描述
    /// - `Ok(None)`: 无结果，或结果没有描述字段
    /// - `Err(_)`: 传输失败 / 非 2xx / 响应无法解析
    async fn find_description(&self, query: &BookQuery) -> Result<Option<String>, CatalogError>;
}
