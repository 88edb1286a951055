use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    pub(crate) page: Option<String>,
    pub(crate) page_size: usize,
}

impl ListBooksCommandRequest {
    pub fn new(page: Option<&str>, page_size: usize) -> Self {
        Self {
            page: page.map(str::to_string),
            page_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub next_page: Option<String>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>, next_page: Option<String>) -> Self {
        Self {
            books,
            next_page,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let res = self.catalog_service.list_books(req.page.as_deref(), req.page_size)
            .await.map_err(CommandError::from)?;
        Ok(ListBooksCommandResponse::new(res.records, res.next_page))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn create_test_service() -> Arc<dyn CatalogService> {
        let book_repo = create_book_repository(RepositoryStore::InMemory).await;
        factory::create_catalog_service(&Configuration::new("test"),
                                        RepositoryStore::InMemory, book_repo).await
    }

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = create_test_service().await;

        let res = ListBooksCommand::new(svc.clone())
            .execute(ListBooksCommandRequest::new(None, 10)).await.expect("should list books");
        assert_eq!(0, res.books.len());

        for i in 0..3 {
            let _ = AddBookCommand::new(svc.clone())
                .execute(AddBookCommandRequest::new(format!("title_{}", i).as_str(), "author", 1))
                .await.expect("should add book");
        }
        let res = ListBooksCommand::new(svc)
            .execute(ListBooksCommandRequest::new(None, 10)).await.expect("should list books");
        assert_eq!(3, res.books.len());
        assert_eq!(None, res.next_page);
    }
}
