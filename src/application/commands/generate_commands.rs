//! Generation Commands - 文本生成命令

use crate::domain::{GenerationRequest, SentenceCount};

/// 生成书籍介绍
#[derive(Debug, Clone)]
pub struct GenerateIntroCommand {
    pub request: GenerationRequest,
}

/// 生成书籍摘要
#[derive(Debug, Clone)]
pub struct GenerateSummaryCommand {
    pub request: GenerationRequest,
    pub sentences: SentenceCount,
}

/// 同时生成介绍与摘要
#[derive(Debug, Clone)]
pub struct GenerateAllCommand {
    pub request: GenerationRequest,
    pub sentences: SentenceCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroResult {
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllResult {
    pub intro: String,
    pub summary: String,
}
