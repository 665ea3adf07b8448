//! Author model.

use biblioteca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `autor` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Author {
    pub id: DbId,
    pub nome: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new author.
#[derive(Debug, Deserialize)]
pub struct CreateAuthor {
    pub nome: String,
}

/// DTO for renaming an author.
#[derive(Debug, Deserialize)]
pub struct UpdateAuthor {
    pub nome: String,
}
