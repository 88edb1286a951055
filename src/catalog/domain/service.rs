use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::gateway::events::EventPublisher;
use crate::utils::text;

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        if book.total_copies < 1 {
            return Err(LibraryError::validation(
                format!("invalid copies {} for {}", book.total_copies, book.book_key).as_str(),
                Some("copies".to_string())));
        }
        let entity = BookEntity::from(book);
        let _ = self.book_repository.create(&entity).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "book_added", entity.book_key.as_str(), book)?).await?;
        Ok(BookDto::from(&entity))
    }

    async fn check_availability(&self, title: &str, author: &str) -> LibraryResult<BookDto> {
        let key = text::book_key(title, author);
        self.book_repository.get(key.as_str()).await.map(|b| BookDto::from(&b))
    }

    async fn list_books(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>> {
        let res = self.book_repository.query(&HashMap::new(), page, page_size).await?;
        let records = res.records.iter().map(BookDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> BookDto {
        BookDto {
            book_key: other.book_key.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            total_copies: other.total_copies,
            available_copies: other.available_copies,
            version: other.version,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> BookEntity {
        BookEntity {
            book_key: other.book_key.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            total_copies: other.total_copies,
            available_copies: other.available_copies,
            version: other.version,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
