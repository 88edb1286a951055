use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) copies: i64,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, copies: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            copies,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.copies)
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn create_test_command() -> AddBookCommand {
        let book_repo = create_book_repository(RepositoryStore::InMemory).await;
        let svc = factory::create_catalog_service(&Configuration::new("test"),
                                                  RepositoryStore::InMemory, book_repo).await;
        AddBookCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = create_test_command().await;

        let res = cmd.execute(AddBookCommandRequest::new("Clean Code", "Robert C. Martin", 5))
            .await.expect("should add book");
        assert_eq!(5, res.book.available_copies);
    }

    #[tokio::test]
    async fn test_should_fail_add_book_for_duplicate() {
        let cmd = create_test_command().await;

        let _ = cmd.execute(AddBookCommandRequest::new("Clean Code", "Robert C. Martin", 5))
            .await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new("Clean Code", "Robert C. Martin", 5)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { message: _ })));
    }
}
