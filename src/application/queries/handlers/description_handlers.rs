//! Description Query Handlers
//!
//! 书目元数据检索是尽力而为的：任何失败都降级为空描述，绝不向上传播。

use std::sync::Arc;

use crate::application::ports::BookCatalogPort;
use crate::application::queries::description_queries::*;
use crate::domain::Description;

/// FetchDescription Handler - 获取书籍描述
pub struct FetchDescriptionHandler {
    catalog: Arc<dyn BookCatalogPort>,
}

impl FetchDescriptionHandler {
    pub fn new(catalog: Arc<dyn BookCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: FetchDescription) -> DescriptionOutcome {
        match self.catalog.find_description(&query.query).await {
            Ok(Some(text)) => {
                tracing::debug!(
                    title = %query.query.title,
                    description_len = text.len(),
                    "Book description found"
                );
                DescriptionOutcome::Found(Description::new(text))
            }
            Ok(None) => {
                tracing::info!(
                    title = %query.query.title,
                    author = %query.query.author,
                    "No description in catalog"
                );
                DescriptionOutcome::Missing
            }
            Err(e) => {
                tracing::warn!(
                    title = %query.query.title,
                    author = %query.query.author,
                    error = %e,
                    "Catalog lookup failed, continuing without description"
                );
                DescriptionOutcome::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{dune_request, CatalogBehavior, FakeCatalog};

    fn query() -> FetchDescription {
        FetchDescription {
            query: dune_request("en").book,
        }
    }

    #[tokio::test]
    async fn test_found_description() {
        let catalog = FakeCatalog::new(CatalogBehavior::Found("A desert planet saga"));
        let handler = FetchDescriptionHandler::new(catalog.clone());

        let outcome = handler.handle(query()).await;

        assert_eq!(
            outcome,
            DescriptionOutcome::Found(Description::new("A desert planet saga"))
        );
        assert_eq!(
            catalog.queries.lock().unwrap().as_slice(),
            ["Dune Frank Herbert"]
        );
    }

    #[tokio::test]
    async fn test_zero_items_gives_empty_description() {
        let handler = FetchDescriptionHandler::new(FakeCatalog::new(CatalogBehavior::Empty));

        let outcome = handler.handle(query()).await;

        assert_eq!(outcome, DescriptionOutcome::Missing);
        assert!(outcome.into_description().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failure_is_swallowed() {
        let handler = FetchDescriptionHandler::new(FakeCatalog::new(CatalogBehavior::Fail));

        let outcome = handler.handle(query()).await;

        assert!(outcome.is_degraded());
        assert_eq!(outcome.into_description(), Description::empty());
    }
}
