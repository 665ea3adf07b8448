//! Book model.
//!
//! A book may optionally reference an author and a category. Both FKs
//! are nullable and go `SET NULL` when the referenced row is deleted.

use biblioteca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `livro` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: DbId,
    pub nome: String,
    pub autor_id: Option<DbId>,
    pub categoria_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a new book.
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub nome: String,
    pub autor_id: Option<DbId>,
    pub categoria_id: Option<DbId>,
}

/// DTO for updating a book. Omitted fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateBook {
    pub nome: Option<String>,
    pub autor_id: Option<DbId>,
    pub categoria_id: Option<DbId>,
}
