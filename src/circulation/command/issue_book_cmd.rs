use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};

pub(crate) struct IssueBookCommand {
    circulation_service: Arc<dyn CirculationService>,
}

impl IssueBookCommand {
    pub(crate) fn new(circulation_service: Arc<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
}

impl IssueBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IssueBookCommandResponse {
    pub book: BookDto,
}

impl IssueBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand {
    async fn execute(&self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.circulation_service.issue_book(req.title.as_str(), req.author.as_str())
            .await.map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::catalog::factory as catalog_factory;
    use crate::circulation::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::circulation::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn create_test_command() -> IssueBookCommand {
        let book_repo: Arc<dyn BookRepository> = create_book_repository(RepositoryStore::InMemory).await;
        let catalog_svc = catalog_factory::create_catalog_service(
            &Configuration::new("test"), RepositoryStore::InMemory, book_repo.clone()).await;
        let book = BookDto::new("Clean Code", "Robert C. Martin", 1);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let svc = factory::create_circulation_service(
            &Configuration::new("test"), RepositoryStore::InMemory, book_repo).await;
        IssueBookCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_issue_book() {
        let cmd = create_test_command().await;

        let res = cmd.execute(IssueBookCommandRequest::new("Clean Code", "Robert C. Martin"))
            .await.expect("should issue book");
        assert_eq!(0, res.book.available_copies);

        let res = cmd.execute(IssueBookCommandRequest::new("Clean Code", "Robert C. Martin")).await;
        assert!(matches!(res, Err(CommandError::NoCopies { message: _ })));
    }
}
