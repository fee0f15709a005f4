use std::sync::Arc;

use async_trait::async_trait;
use bookshelf_db::StoreError;

use super::models::{Book, NewBook};

/// Shared handle the books module and its handlers hold.
pub type SharedStore = Arc<dyn BookStore>;

/// Storage operations behind the books API.
///
/// Each call maps to one autocommit statement; the backend's own locking is the
/// only concurrency control.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Verify the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Fetch every book in backend order.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    /// Fetch one book, `None` when no row has this id.
    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError>;

    /// Insert a book and return the id the backend assigned.
    async fn create(&self, book: &NewBook) -> Result<i32, StoreError>;

    /// Replace title, author and year of the row with `book.id`.
    /// Returns the number of rows changed; 0 means no such id.
    async fn update(&self, book: &Book) -> Result<u64, StoreError>;

    /// Remove the row with `id`, returning the number of rows removed.
    async fn delete(&self, id: i32) -> Result<u64, StoreError>;

    /// Release backend resources.
    async fn close(&self) {}
}
