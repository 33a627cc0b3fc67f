//! Generation Context - 已校验的生成请求

use super::value_objects::{Author, BookQuery, Language, Title, Tone};

/// 生成请求
///
/// 由 HTTP 层校验后构造，之后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub book: BookQuery,
    pub tone: Tone,
    pub lang: Language,
}

impl GenerationRequest {
    pub fn new(title: Title, author: Author, tone: Tone, lang: Language) -> Self {
        Self {
            book: BookQuery::new(title, author),
            tone,
            lang,
        }
    }

    pub fn title(&self) -> &Title {
        &self.book.title
    }

    pub fn author(&self) -> &Author {
        &self.book.author
    }
}
