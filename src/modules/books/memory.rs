use std::collections::BTreeMap;

use async_trait::async_trait;
use bookshelf_db::StoreError;
use tokio::sync::RwLock;

use super::models::{Book, NewBook};
use super::store::BookStore;

/// In-process book store. Rows are kept in id order and ids are never reused.
#[derive(Debug)]
pub struct MemoryBookStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug)]
struct MemoryState {
    rows: BTreeMap<i32, Book>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let state = self.state.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn create(&self, book: &NewBook) -> Result<i32, StoreError> {
        let mut state = self.state.write().await;
        let id = state.next_id.ok_or(StoreError::Exhausted("book"))?;
        state.next_id = id.checked_add(1);
        state.rows.insert(id, book.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, book: &Book) -> Result<u64, StoreError> {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&book.id) {
            Some(row) => {
                *row = book.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let mut state = self.state.write().await;
        Ok(u64::from(state.rows.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> NewBook {
        NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: "1965".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryBookStore::new();
        let first = store.create(&dune()).await.unwrap();
        assert_eq!(store.delete(first).await.unwrap(), 1);

        let second = store.create(&dune()).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn update_of_missing_row_changes_nothing() {
        let store = MemoryBookStore::new();
        let affected = store.update(&dune().with_id(42)).await.unwrap();

        assert_eq!(affected, 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_fails_once_ids_run_out() {
        let store = MemoryBookStore::new();
        store.state.write().await.next_id = Some(i32::MAX);

        assert_eq!(store.create(&dune()).await.unwrap(), i32::MAX);
        let err = store.create(&dune()).await.unwrap_err();
        assert!(matches!(err, StoreError::Exhausted(_)));
        assert!(!err.is_unavailable());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_returns_rows_in_id_order() {
        let store = MemoryBookStore::new();
        for _ in 0..3 {
            store.create(&dune()).await.unwrap();
        }

        let ids: Vec<i32> = store.list().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
