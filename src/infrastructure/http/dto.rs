//! Data Transfer Objects
//!
//! 请求体字段全部按可选反序列化，再在 handler 中校验为领域类型。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Author, GenerationError, GenerationRequest, Language, SentenceCount, Title, Tone};

// ============================================================================
// Request
// ============================================================================

/// 三个生成接口共用的请求体
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequestDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub tone: Option<String>,
    pub lang: Option<String>,
    /// 数字或数字字符串
    pub num: Option<Value>,
}

impl GenerateRequestDto {
    /// 校验 title / author / tone / lang
    pub fn to_generation_request(&self) -> Result<GenerationRequest, GenerationError> {
        let title = Title::new(required("title", &self.title)?)?;
        let author = Author::new(required("author", &self.author)?)?;
        let tone = Tone::new(required("tone", &self.tone)?)?;
        let lang = Language::from_code(required("lang", &self.lang)?);

        Ok(GenerationRequest::new(title, author, tone, lang))
    }

    /// 校验 num，合法范围 `1..=max`
    pub fn sentence_count(&self, max: u32) -> Result<SentenceCount, GenerationError> {
        let out_of_range = |got: String| GenerationError::SentenceCountOutOfRange { got, max };

        let value = match &self.num {
            None | Some(Value::Null) => return Err(GenerationError::MissingField("num")),
            // 3.0 与 3 等价，带小数部分的值拒绝
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.is_finite() && f.fract() == 0.0)
                        .map(|f| f as i64)
                })
                .ok_or_else(|| out_of_range(n.to_string()))?,
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| out_of_range(format!("{:?}", s)))?,
            Some(other) => return Err(out_of_range(other.to_string())),
        };

        SentenceCount::new(value, max)
    }
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, GenerationError> {
    value.as_deref().ok_or(GenerationError::MissingField(field))
}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Serialize)]
pub struct IntroResponse {
    pub intro: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct AllResponse {
    pub intro: String,
    pub summary: String,
}
