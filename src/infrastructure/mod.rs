//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现与 HTTP 接入层

pub mod adapters;
pub mod http;

pub use adapters::{
    GoogleBooksClient, GoogleBooksClientConfig, OpenAiClientConfig, OpenAiCompletionClient,
};
