use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use bookshelf_http::AppError;

use super::models::{Book, NewBook};
use super::store::SharedStore;

/// Routes for the books resource, with the store attached as state.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book).put(update_book))
        .route("/books/{id}", get(get_book).delete(delete_book))
        .with_state(store)
}

fn parse_book_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("book id must be an integer, got '{}'", raw)))
}

async fn list_books(State(store): State<SharedStore>) -> Result<Json<Vec<Book>>, AppError> {
    let books = store.list().await?;
    tracing::debug!(count = books.len(), "listed books");
    Ok(Json(books))
}

async fn get_book(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id = parse_book_id(&id)?;
    store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("book {} not found", id)))
}

async fn create_book(
    State(store): State<SharedStore>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<Json<i32>, AppError> {
    let Json(book) = payload?;
    let id = store.create(&book).await?;
    tracing::info!(book_id = id, "book created");
    Ok(Json(id))
}

async fn update_book(
    State(store): State<SharedStore>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<Json<u64>, AppError> {
    let Json(book) = payload?;
    let affected = store.update(&book).await?;
    tracing::info!(book_id = book.id, rows_affected = affected, "book updated");
    Ok(Json(affected))
}

async fn delete_book(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<u64>, AppError> {
    let id = parse_book_id(&id)?;
    let affected = store.delete(id).await?;
    tracing::info!(book_id = id, rows_affected = affected, "book deleted");
    Ok(Json(affected))
}
