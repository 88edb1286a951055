use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::books::domain::Book;
use crate::utils::text;

// BookEntity abstracts one title in the inventory registry along with its
// copy counters. Invariant: 0 <= available_copies <= total_copies.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_key: String,
    pub title: String,
    pub author: String,
    pub total_copies: i64,
    pub available_copies: i64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, total_copies: i64) -> Self {
        Self {
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

    // Takes one copy off the shelf; fails when every copy is already out.
    pub fn issue(&mut self) -> LibraryResult<()> {
        if self.available_copies < 1 {
            return Err(LibraryError::no_copies(
                format!("no copies available for {}", self.book_key).as_str()));
        }
        self.available_copies -= 1;
        self.updated_at = Utc::now();
        Ok(())
    }

    // Puts one copy back on the shelf; fails when every copy owned is present.
    pub fn return_copy(&mut self) -> LibraryResult<()> {
        if self.available_copies >= self.total_copies {
            return Err(LibraryError::at_capacity(
                format!("all copies already present for {}", self.book_key).as_str()));
        }
        self.available_copies += 1;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_key.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
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
