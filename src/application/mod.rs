//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（BookCatalog、Completion）
//! - commands: 生成命令及处理器
//! - queries: 书籍描述查询及处理器（尽力而为的元数据获取）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    AllResult, GenerateAllCommand, GenerateIntroCommand, GenerateSummaryCommand, IntroResult,
    SummaryResult,
    handlers::{GenerateAllHandler, GenerateIntroHandler, GenerateSummaryHandler},
};

pub use error::ApplicationError;

pub use ports::{BookCatalogPort, CatalogError, CompletionError, CompletionPort};

pub use queries::{
    handlers::FetchDescriptionHandler, DescriptionOutcome, FetchDescription,
};
