pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CirculationService: Sync + Send {
    async fn issue_book(&self, title: &str, author: &str) -> LibraryResult<BookDto>;
    async fn return_book(&self, title: &str, author: &str) -> LibraryResult<BookDto>;
}
