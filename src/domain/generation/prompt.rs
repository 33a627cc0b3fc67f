//! Prompt Builder
//!
//! 纯函数：相同输入永远得到相同的 Prompt 字符串，不做任何 IO。
//! 语言只区分韩语 (`ko`) 与默认英文两种模板。

use super::request::GenerationRequest;
use super::value_objects::{Description, Language, SentenceCount};

/// Prompt 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// 1~2 句的书籍介绍
    Intro,
    /// 指定句数的摘要
    Summary(SentenceCount),
}

/// 构造发送给 Completion API 的 Prompt
pub fn build_prompt(
    kind: PromptKind,
    params: &GenerationRequest,
    description: &Description,
) -> String {
    let tone = &params.tone;
    let title = params.title();
    let author = params.author();

    match (kind, params.lang) {
        (PromptKind::Intro, Language::Korean) => format!(
            "책 소개를 1~2문장으로 만들어줘. 말투: {tone}\n\n제목: {title}\n저자: {author}\n설명:\n{description}"
        ),
        (PromptKind::Intro, Language::English) => format!(
            "Write a 1–2 sentence introduction. Tone: {tone}\n\nTitle: {title}\nAuthor: {author}\nDescription:\n{description}"
        ),
        (PromptKind::Summary(num), Language::Korean) => {
            format!("아래 내용을 {num}문장으로 요약해줘. 말투: {tone}\n\n{description}")
        }
        (PromptKind::Summary(num), Language::English) => {
            format!("Summarize the following in {num} sentences. Tone: {tone}\n\n{description}")
        }
    }
}
