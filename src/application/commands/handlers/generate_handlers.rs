//! Generation Command Handlers
//!
//! 流程固定：获取描述 → 构造 Prompt → 调用 Completion。
//! 描述获取失败会降级为空描述；Completion 失败直接返回错误。

use std::sync::Arc;

use crate::application::commands::generate_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{BookCatalogPort, CompletionPort};
use crate::application::queries::handlers::FetchDescriptionHandler;
use crate::application::queries::FetchDescription;
use crate::domain::{build_prompt, Description, GenerationRequest, PromptKind};

async fn fetch_description(
    fetcher: &FetchDescriptionHandler,
    request: &GenerationRequest,
) -> Description {
    fetcher
        .handle(FetchDescription {
            query: request.book.clone(),
        })
        .await
        .into_description()
}

/// GenerateIntro Handler - 生成书籍介绍
pub struct GenerateIntroHandler {
    fetcher: FetchDescriptionHandler,
    completion: Arc<dyn CompletionPort>,
}

impl GenerateIntroHandler {
    pub fn new(catalog: Arc<dyn BookCatalogPort>, completion: Arc<dyn CompletionPort>) -> Self {
        Self {
            fetcher: FetchDescriptionHandler::new(catalog),
            completion,
        }
    }

    pub async fn handle(&self, cmd: GenerateIntroCommand) -> Result<IntroResult, ApplicationError> {
        let description = fetch_description(&self.fetcher, &cmd.request).await;
        let prompt = build_prompt(PromptKind::Intro, &cmd.request, &description);

        let intro = self.completion.complete(&prompt).await?;

        tracing::info!(
            title = %cmd.request.title(),
            lang = cmd.request.lang.as_str(),
            intro_len = intro.len(),
            "Intro generated"
        );

        Ok(IntroResult { intro })
    }
}

/// GenerateSummary Handler - 生成书籍摘要
pub struct GenerateSummaryHandler {
    fetcher: FetchDescriptionHandler,
    completion: Arc<dyn CompletionPort>,
}

impl GenerateSummaryHandler {
    pub fn new(catalog: Arc<dyn BookCatalogPort>, completion: Arc<dyn CompletionPort>) -> Self {
        Self {
            fetcher: FetchDescriptionHandler::new(catalog),
            completion,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSummaryCommand,
    ) -> Result<SummaryResult, ApplicationError> {
        let description = fetch_description(&self.fetcher, &cmd.request).await;
        let prompt = build_prompt(PromptKind::Summary(cmd.sentences), &cmd.request, &description);

        let summary = self.completion.complete(&prompt).await?;

        tracing::info!(
            title = %cmd.request.title(),
            lang = cmd.request.lang.as_str(),
            sentences = cmd.sentences.get(),
            summary_len = summary.len(),
            "Summary generated"
        );

        Ok(SummaryResult { summary })
    }
}

/// GenerateAll Handler - 同时生成介绍与摘要
///
/// 描述只获取一次，两次 Completion 调用默认串行；`concurrent` 为 true 时并发执行。
pub struct GenerateAllHandler {
    fetcher: FetchDescriptionHandler,
    completion: Arc<dyn CompletionPort>,
    concurrent: bool,
}

impl GenerateAllHandler {
    pub fn new(
        catalog: Arc<dyn BookCatalogPort>,
        completion: Arc<dyn CompletionPort>,
        concurrent: bool,
    ) -> Self {
        Self {
            fetcher: FetchDescriptionHandler::new(catalog),
            completion,
            concurrent,
        }
    }

    pub async fn handle(&self, cmd: GenerateAllCommand) -> Result<AllResult, ApplicationError> {
        let description = fetch_description(&self.fetcher, &cmd.request).await;
        let intro_prompt = build_prompt(PromptKind::Intro, &cmd.request, &description);
        let summary_prompt =
            build_prompt(PromptKind::Summary(cmd.sentences), &cmd.request, &description);

        let (intro, summary) = if self.concurrent {
            tokio::try_join!(
                self.completion.complete(&intro_prompt),
                self.completion.complete(&summary_prompt),
            )?
        } else {
            let intro = self.completion.complete(&intro_prompt).await?;
            let summary = self.completion.complete(&summary_prompt).await?;
            (intro, summary)
        };

        tracing::info!(
            title = %cmd.request.title(),
            lang = cmd.request.lang.as_str(),
            concurrent = self.concurrent,
            intro_len = intro.len(),
            summary_len = summary.len(),
            "Intro and summary generated"
        );

        Ok(AllResult { intro, summary })
    }
}
