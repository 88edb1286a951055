use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::circulation::domain::CirculationService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::utils::text;

pub(crate) struct CirculationServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CirculationServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CirculationService for CirculationServiceImpl {
    async fn issue_book(&self, title: &str, author: &str) -> LibraryResult<BookDto> {
        let key = text::book_key(title, author);
        let mut book = self.book_repository.get(key.as_str()).await?;
        // the failed bounds check never reaches the store
        book.issue()?;
        self.book_repository.update(&book).await?;
        let dto = BookDto::from(&book);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "book_issued", key.as_str(), &dto)?).await?;
        Ok(dto)
    }

    async fn return_book(&self, title: &str, author: &str) -> LibraryResult<BookDto> {
        let key = text::book_key(title, author);
        let mut book = self.book_repository.get(key.as_str()).await?;
        book.return_copy()?;
        self.book_repository.update(&book).await?;
        let dto = BookDto::from(&book);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "book_returned", key.as_str(), &dto)?).await?;
        Ok(dto)
    }
}
