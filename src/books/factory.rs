use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;

// The registry lives in the repository instance, so the caller creates it
// once and shares it between the catalog and circulation services.
pub(crate) async fn create_book_repository(store: RepositoryStore) -> Arc<dyn BookRepository> {
    match store {
        RepositoryStore::InMemory => Arc::new(MemoryBookRepository::new()),
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::factory::create_book_repository;
    use crate::core::repository::{Repository, RepositoryStore};

    #[tokio::test]
    async fn test_should_create_book_repository() {
        let repo = create_book_repository(RepositoryStore::InMemory).await;
        let book = BookEntity::new("Clean Code", "Robert C. Martin", 5);
        let size = repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);
    }
}
