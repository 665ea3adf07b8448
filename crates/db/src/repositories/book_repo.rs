//! Repository for the `livro` table.

use biblioteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::{Book, CreateBook, UpdateBook};

const COLUMNS: &str = "id, nome, autor_id, categoria_id, created_at, updated_at";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// List all books, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM livro ORDER BY id ASC");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM livro WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Add a new book, returning the created row.
    ///
    /// A nonexistent `autor_id`/`categoria_id` fails the FK check and
    /// surfaces as a driver error.
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO livro (nome, autor_id, categoria_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.nome)
            .bind(input.autor_id)
            .bind(input.categoria_id)
            .fetch_one(pool)
            .await
    }

    /// Update a book by ID, returning the updated row.
    ///
    /// Omitted fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE livro SET
                nome = COALESCE($2, nome),
                autor_id = COALESCE($3, autor_id),
                categoria_id = COALESCE($4, categoria_id),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(input.autor_id)
            .bind(input.categoria_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book by ID. Returns `true` if a row was deleted.
    ///
    /// Loans for the book are removed by the FK cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM livro WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
