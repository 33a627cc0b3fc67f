//! Completion Adapter - OpenAI 兼容的 chat/completions 客户端

mod openai_client;

pub use openai_client::*;
