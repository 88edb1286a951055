use std::sync::Arc;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::check_availability_cmd::{CheckAvailabilityCommand, CheckAvailabilityCommandRequest, CheckAvailabilityCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::ConsoleError;

pub(crate) async fn add_book(
    svc: Arc<dyn CatalogService>,
    req: AddBookCommandRequest) -> Result<AddBookCommandResponse, ConsoleError> {
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(res)
}

pub(crate) async fn check_availability(
    svc: Arc<dyn CatalogService>,
    req: CheckAvailabilityCommandRequest) -> Result<CheckAvailabilityCommandResponse, ConsoleError> {
    let res = CheckAvailabilityCommand::new(svc).execute(req).await?;
    Ok(res)
}

pub(crate) async fn list_books(
    svc: Arc<dyn CatalogService>,
    req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, ConsoleError> {
    let res = ListBooksCommand::new(svc).execute(req).await?;
    Ok(res)
}
