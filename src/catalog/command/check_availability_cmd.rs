use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookStatus;

pub(crate) struct CheckAvailabilityCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl CheckAvailabilityCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckAvailabilityCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
}

impl CheckAvailabilityCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckAvailabilityCommandResponse {
    pub book: BookDto,
    pub status: BookStatus,
}

impl CheckAvailabilityCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let status = book.status();
        Self {
            book,
            status,
        }
    }
}

#[async_trait]
impl Command<CheckAvailabilityCommandRequest, CheckAvailabilityCommandResponse> for CheckAvailabilityCommand {
    async fn execute(&self, req: CheckAvailabilityCommandRequest) -> Result<CheckAvailabilityCommandResponse, CommandError> {
        self.catalog_service.check_availability(req.title.as_str(), req.author.as_str())
            .await.map_err(CommandError::from).map(CheckAvailabilityCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::check_availability_cmd::{CheckAvailabilityCommand, CheckAvailabilityCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::core::repository::RepositoryStore;

    async fn create_test_service() -> Arc<dyn CatalogService> {
        let book_repo = create_book_repository(RepositoryStore::InMemory).await;
        factory::create_catalog_service(&Configuration::new("test"),
                                        RepositoryStore::InMemory, book_repo).await
    }

    #[tokio::test]
    async fn test_should_run_check_availability() {
        let svc = create_test_service().await;
        let _ = AddBookCommand::new(svc.clone())
            .execute(AddBookCommandRequest::new("Clean Code", "Robert C. Martin", 5))
            .await.expect("should add book");

        let res = CheckAvailabilityCommand::new(svc)
            .execute(CheckAvailabilityCommandRequest::new("Clean Code", "Robert C. Martin"))
            .await.expect("should return book");
        assert_eq!(BookStatus::Available, res.status);
        assert_eq!(5, res.book.available_copies);
    }

    #[tokio::test]
    async fn test_should_fail_check_availability_for_unknown_book() {
        let svc = create_test_service().await;

        let res = CheckAvailabilityCommand::new(svc)
            .execute(CheckAvailabilityCommandRequest::new("Unknown", "Nobody")).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
