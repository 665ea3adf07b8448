//! Repository for the `emprestimo` table.

use biblioteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::loan::{CreateLoan, Loan, UpdateLoan};

const COLUMNS: &str =
    "id, aluno_id, livro_id, emprestado_em, devolvido_em, created_at, updated_at";

/// Provides CRUD operations for loans.
pub struct LoanRepo;

impl LoanRepo {
    /// List all loans, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Loan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM emprestimo ORDER BY id ASC");
        sqlx::query_as::<_, Loan>(&query).fetch_all(pool).await
    }

    /// Find a loan by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Loan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM emprestimo WHERE id = $1");
        sqlx::query_as::<_, Loan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check out a book for a student, returning the created row.
    ///
    /// `emprestado_em` is set by the column default. A nonexistent
    /// student or book fails the FK check and surfaces as a driver
    /// error.
    pub async fn create(pool: &PgPool, input: &CreateLoan) -> Result<Loan, sqlx::Error> {
        let query = format!(
            "INSERT INTO emprestimo (aluno_id, livro_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Loan>(&query)
            .bind(input.aluno_id)
            .bind(input.livro_id)
            .fetch_one(pool)
            .await
    }

    /// Mark a loan as returned, returning the updated row.
    ///
    /// An absent `devolvido_em` records the return as now().
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLoan,
    ) -> Result<Option<Loan>, sqlx::Error> {
        let query = format!(
            "UPDATE emprestimo SET
                devolvido_em = COALESCE($2, now()),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Loan>(&query)
            .bind(id)
            .bind(input.devolvido_em)
            .fetch_optional(pool)
            .await
    }

    /// Delete a loan by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM emprestimo WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
