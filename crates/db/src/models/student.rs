//! Student model.

use biblioteca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `aluno` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: DbId,
    pub nome: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for enrolling a new student.
#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    pub nome: String,
}

/// DTO for renaming a student.
#[derive(Debug, Deserialize)]
pub struct UpdateStudent {
    pub nome: String,
}
