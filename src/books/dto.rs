use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::text;

// BookDto is a data transfer object for catalog and circulation services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub book_key: String,
    pub title: String,
    pub author: String,
    pub total_copies: i64,
    pub available_copies: i64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, total_copies: i64) -> BookDto {
        BookDto {
            book_key: text::book_key(title, author),
            title: title.to_string(),
            author: author.to_string(),
            total_copies,
            available_copies: total_copies,
            version: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_key.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    fn status(&self) -> BookStatus {
        if self.available_copies > 0 {
            BookStatus::Available
        } else {
            BookStatus::Unavailable
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {} | Author: {} | Total Copies: {} | Available: {}",
               self.title, self.author, self.total_copies, self.available_copies)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::dto::BookDto;
    use crate::core::domain::Identifiable;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Clean Code", "Robert C. Martin", 5);
        assert_eq!("Clean Code", book.title.as_str());
        assert_eq!("Robert C. Martin", book.author.as_str());
        assert_eq!("clean code_robert c. martin", book.id().as_str());
        assert_eq!(5, book.available_copies);
    }

    #[tokio::test]
    async fn test_should_derive_status_from_available_copies() {
        let mut book = BookDto::new("Clean Code", "Robert C. Martin", 1);
        assert_eq!(BookStatus::Available, book.status());
        assert!(book.is_available());
        book.available_copies = 0;
        assert_eq!(BookStatus::Unavailable, book.status());
        assert!(!book.is_available());
    }

    #[tokio::test]
    async fn test_should_format_inventory_line() {
        let book = BookDto::new("Clean Code", "Robert C. Martin", 5);
        assert_eq!("Title: Clean Code | Author: Robert C. Martin | Total Copies: 5 | Available: 5",
                   book.to_string());
    }
}
