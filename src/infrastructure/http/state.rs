//! Application State
//!
//! 持有生成参数与各命令处理器，启动时构造一次，之后只读

use std::sync::Arc;

use crate::application::{
    BookCatalogPort, CompletionPort, GenerateAllHandler, GenerateIntroHandler,
    GenerateSummaryHandler,
};
use crate::config::GenerationConfig;

/// 应用状态
pub struct AppState {
    // ========== Settings ==========
    /// `num` 的上限
    pub max_sentences: u32,

    // ========== Command Handlers ==========
    pub generate_intro_handler: GenerateIntroHandler,
    pub generate_summary_handler: GenerateSummaryHandler,
    pub generate_all_handler: GenerateAllHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        catalog: Arc<dyn BookCatalogPort>,
        completion: Arc<dyn CompletionPort>,
        generation: &GenerationConfig,
    ) -> Self {
        Self {
            max_sentences: generation.max_sentences,

            generate_intro_handler: GenerateIntroHandler::new(catalog.clone(), completion.clone()),
            generate_summary_handler: GenerateSummaryHandler::new(
                catalog.clone(),
                completion.clone(),
            ),
            generate_all_handler: GenerateAllHandler::new(
                catalog,
                completion,
                generation.concurrent_all,
            ),
        }
    }
}
