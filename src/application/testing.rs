//! 测试用的内存端口实现

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{BookCatalogPort, CatalogError, CompletionError, CompletionPort};
use crate::domain::{Author, BookQuery, GenerationRequest, Language, Title, Tone};

/// 书目端口的固定行为
pub enum CatalogBehavior {
    Found(&'static str),
    Empty,
    Fail,
}

/// 内存书目服务，记录收到的检索词
pub struct FakeCatalog {
    behavior: CatalogBehavior,
    pub queries: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new(behavior: CatalogBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl BookCatalogPort for FakeCatalog {
    async fn find_description(&self, query: &BookQuery) -> Result<Option<String>, CatalogError> {
        self.queries.lock().unwrap().push(query.search_term());
        match self.behavior {
            CatalogBehavior::Found(desc) => Ok(Some(desc.to_string())),
            CatalogBehavior::Empty => Ok(None),
            CatalogBehavior::Fail => Err(CatalogError::NetworkError("connection refused".into())),
        }
    }
}

type Reply = Box<dyn Fn(&str) -> Result<String, CompletionError> + Send + Sync>;

/// 记录 Prompt 的 Completion 服务，回复由闭包决定
pub struct RecordingCompletion {
    reply: Reply,
    pub prompts: Mutex<Vec<String>>,
}

impl RecordingCompletion {
    pub fn new(
        reply: impl Fn(&str) -> Result<String, CompletionError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &'static str) -> Arc<Self> {
        Self::new(move |_| Ok(text.to_string()))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(|_| Err(CompletionError::ServiceError("HTTP 500".into())))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionPort for RecordingCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.reply)(prompt)
    }
}

pub fn dune_request(lang: &str) -> GenerationRequest {
    GenerationRequest::new(
        Title::new("Dune").unwrap(),
        Author::new("Frank Herbert").unwrap(),
        Tone::new("epic").unwrap(),
        Language::from_code(lang),
    )
}
