//! Generation Context
//!
//! 请求级别的值对象，以及纯函数 Prompt 构造器。
//! 所有类型只在单次请求内存活，不做持久化。

mod errors;
mod prompt;
mod request;
mod value_objects;

pub use errors::GenerationError;
pub use prompt::{build_prompt, PromptKind};
pub use request::GenerationRequest;
pub use value_objects::{Author, BookQuery, Description, Language, SentenceCount, Title, Tone};
