//! Generation Context - Value Objects

use std::fmt;

use super::errors::GenerationError;

const MAX_TITLE_CHARS: usize = 500;
const MAX_AUTHOR_CHARS: usize = 500;
const MAX_TONE_CHARS: usize = 100;

/// 校验文本字段：去首尾空白后非空，且不超过字符上限
fn checked_text(
    field: &'static str,
    value: impl Into<String>,
    max: usize,
) -> Result<String, GenerationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::BlankField { field });
    }
    if trimmed.chars().count() > max {
        return Err(GenerationError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}

/// 书名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, GenerationError> {
        checked_text("title", title, MAX_TITLE_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 作者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author(String);

impl Author {
    pub fn new(author: impl Into<String>) -> Result<Self, GenerationError> {
        checked_text("author", author, MAX_AUTHOR_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 语气描述
///
/// 原样透传进 Prompt，本系统不解释其含义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tone(String);

impl Tone {
    pub fn new(tone: impl Into<String>) -> Result<Self, GenerationError> {
        checked_text("tone", tone, MAX_TONE_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prompt 模板语言
///
/// 只识别 `"ko"`，其余任何取值都回落到英文模板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Korean,
    #[default]
    English,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        if code == "ko" {
            Language::Korean
        } else {
            Language::English
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }
}

/// 摘要句数，取值范围 `1..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceCount(u32);

impl SentenceCount {
    pub fn new(value: i64, max: u32) -> Result<Self, GenerationError> {
        match u32::try_from(value) {
            Ok(n) if (1..=max).contains(&n) => Ok(Self(n)),
            _ => Err(GenerationError::SentenceCountOutOfRange {
                got: value.to_string(),
                max,
            }),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SentenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书籍描述（可能为空）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description(String);

impl Description {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 书目检索条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    pub title: Title,
    pub author: Author,
}

impl BookQuery {
    pub fn new(title: Title, author: Author) -> Self {
        Self { title, author }
    }

    /// 检索关键字：`"{title} {author}"`，URL 编码交给 HTTP 客户端
    pub fn search_term(&self) -> String {
        format!("{} {}", self.title, self.author)
    }
}
