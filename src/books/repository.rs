pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookRepository narrows the generic repository to the book registry; the
// identity key is the only lookup (no secondary finders).
pub(crate) trait BookRepository: Repository<BookEntity> {}
