use std::cmp;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::text;

// MemoryBookRepository keeps the whole registry in one process-local map
// keyed by the normalized book key. The lock satisfies the Sync + Send
// repository contract; the console drives it from a single caller.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    fn matches(entity: &BookEntity, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(k, v)| match k.as_str() {
            "book_key" => entity.book_key == *v,
            "title" => text::normalize(entity.title.as_str()) == text::normalize(v),
            "author" => text::normalize(entity.author.as_str()) == text::normalize(v),
            _ => false,
        })
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.contains_key(entity.book_key.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("book already exists for {}", entity.book_key).as_str()));
        }
        books.insert(entity.book_key.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let existing = books.get(entity.book_key.as_str()).ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", entity.book_key).as_str())
        })?;
        if existing.version != entity.version {
            return Err(LibraryError::validation(
                format!("stale version {} for {}", entity.version, entity.book_key).as_str(),
                Some("conflict".to_string())));
        }
        let mut updated = entity.clone();
        updated.version = entity.version + 1;
        updated.updated_at = Utc::now();
        books.insert(updated.book_key.to_string(), updated);
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.get(id).cloned().ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", id).as_str())
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.remove(id) {
            Some(_) => Ok(1),
            None => Err(LibraryError::not_found(format!("book not found for {}", id).as_str())),
        }
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let books = self.books.read().await;
        let mut records: Vec<BookEntity> = books.values()
            .filter(|b| Self::matches(b, predicate))
            .cloned()
            .collect();
        // map order is unstable, so pin pagination to the key order
        records.sort_by(|a, b| a.book_key.cmp(&b.book_key));

        let page_size = cmp::min(page_size, 500);
        let offset: usize = page.and_then(|p| p.parse().ok()).unwrap_or(0);
        let total = records.len();
        let records: Vec<BookEntity> = records.into_iter().skip(offset).take(page_size).collect();
        let next_page = if offset + page_size < total {
            Some((offset + page_size).to_string())
        } else {
            None
        };
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}

impl BookRepository for MemoryBookRepository {}
