//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Generation Context: 书籍介绍 / 摘要生成（请求值对象 + Prompt 构造）

pub mod generation;

pub use generation::{
    build_prompt, Author, BookQuery, Description, GenerationError, GenerationRequest, Language,
    PromptKind, SentenceCount, Title, Tone,
};
