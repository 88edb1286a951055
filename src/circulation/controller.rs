use std::sync::Arc;
use crate::circulation::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest, IssueBookCommandResponse};
use crate::circulation::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::circulation::domain::CirculationService;
use crate::core::command::Command;
use crate::core::controller::ConsoleError;

pub(crate) async fn issue_book(
    svc: Arc<dyn CirculationService>,
    req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, ConsoleError> {
    let res = IssueBookCommand::new(svc).execute(req).await?;
    Ok(res)
}

pub(crate) async fn return_book(
    svc: Arc<dyn CirculationService>,
    req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, ConsoleError> {
    let res = ReturnBookCommand::new(svc).execute(req).await?;
    Ok(res)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::catalog::factory as catalog_factory;
    use crate::circulation::command::issue_book_cmd::IssueBookCommandRequest;
    use crate::circulation::command::return_book_cmd::ReturnBookCommandRequest;
    use crate::circulation::controller;
    use crate::circulation::domain::CirculationService;
    use crate::circulation::factory;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn create_test_service() -> Arc<dyn CirculationService> {
        let book_repo: Arc<dyn BookRepository> = create_book_repository(RepositoryStore::InMemory).await;
        let catalog_svc = catalog_factory::create_catalog_service(
            &Configuration::new("test"), RepositoryStore::InMemory, book_repo.clone()).await;
        let book = BookDto::new("Design Patterns", "Erich Gamma", 1);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        factory::create_circulation_service(
            &Configuration::new("test"), RepositoryStore::InMemory, book_repo).await
    }

    #[tokio::test]
    async fn test_should_report_console_messages() {
        let svc = create_test_service().await;

        let res = controller::issue_book(
            svc.clone(), IssueBookCommandRequest::new("Unknown", "Nobody")).await;
        assert_eq!(Err("Book not found.".to_string()), res.map(|_| ()));

        let res = controller::return_book(
            svc.clone(), ReturnBookCommandRequest::new("Design Patterns", "Erich Gamma")).await;
        assert_eq!(Err("All copies are already in library.".to_string()), res.map(|_| ()));

        let _ = controller::issue_book(
            svc.clone(), IssueBookCommandRequest::new("Design Patterns", "Erich Gamma"))
            .await.expect("should issue book");
        let res = controller::issue_book(
            svc, IssueBookCommandRequest::new("Design Patterns", "Erich Gamma")).await;
        assert_eq!(Err("No copies available.".to_string()), res.map(|_| ()));
    }
}
