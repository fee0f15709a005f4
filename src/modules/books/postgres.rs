use async_trait::async_trait;
use bookshelf_db::StoreError;
use sqlx::PgPool;

use super::models::{Book, NewBook};
use super::store::BookStore;

/// Book store backed by the Postgres `books` table.
#[derive(Debug, Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn ping(&self) -> Result<(), StoreError> {
        bookshelf_db::ping(&self.pool).await
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let books = sqlx::query_as::<_, Book>("SELECT id, title, author, year FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError> {
        let book =
            sqlx::query_as::<_, Book>("SELECT id, title, author, year FROM books WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(book)
    }

    async fn create(&self, book: &NewBook) -> Result<i32, StoreError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO books (title, author, year) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.year)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, book: &Book) -> Result<u64, StoreError> {
        let result =
            sqlx::query("UPDATE books SET title = $1, author = $2, year = $3 WHERE id = $4")
                .bind(&book.title)
                .bind(&book.author)
                .bind(&book.year)
                .bind(book.id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
