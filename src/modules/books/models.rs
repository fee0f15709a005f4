use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Book {
    /// Database-assigned identifier, immutable after creation
    pub id: i32,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publication year, kept as free-form text
    pub year: String,
}

/// Request model for creating a new book. Any `id` in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewBook {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publication year, kept as free-form text
    pub year: String,
}

impl NewBook {
    /// Attach an identifier, producing the full record.
    pub fn with_id(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
        }
    }
}
