//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod book_catalog;
mod completion;

pub use book_catalog::{BookCatalogPort, CatalogError};
pub use completion::{CompletionError, CompletionPort};
