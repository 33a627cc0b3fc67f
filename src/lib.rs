//! Bookblurb - 书籍介绍 / 摘要生成服务
//!
//! 架构设计: Hexagonal Architecture + 轻量 CQRS
//!
//! 领域层 (domain/):
//! - Generation Context: 请求值对象、Prompt 构造
//!
//! 应用层 (application/):
//! - Ports: BookCatalog、Completion
//! - Commands: 生成介绍 / 摘要 / 两者
//! - Queries: 书籍描述（尽力而为）
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Google Books 客户端、OpenAI Completion 客户端
//! - HTTP: JSON API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
