//! Loan model.
//!
//! A loan ties a student to a book. `devolvido_em` stays NULL while the
//! book is out; returning the book sets it.

use biblioteca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `emprestimo` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Loan {
    pub id: DbId,
    pub aluno_id: DbId,
    pub livro_id: DbId,
    pub emprestado_em: Timestamp,
    pub devolvido_em: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for checking out a book. `emprestado_em` defaults to now().
#[derive(Debug, Deserialize)]
pub struct CreateLoan {
    pub aluno_id: DbId,
    pub livro_id: DbId,
}

/// DTO for returning a book.
///
/// An absent `devolvido_em` means "returned now"; an explicit value
/// backdates the return.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateLoan {
    pub devolvido_em: Option<Timestamp>,
}
