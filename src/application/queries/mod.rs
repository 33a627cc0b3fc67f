//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：外部书目元数据读取

mod description_queries;

pub mod handlers;

pub use description_queries::*;
