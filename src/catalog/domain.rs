pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, PaginatedResult};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn check_availability(&self, title: &str, author: &str) -> LibraryResult<BookDto>;
    async fn list_books(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>>;
}
