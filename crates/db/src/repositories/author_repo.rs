//! Repository for the `autor` table.

use biblioteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::author::{Author, CreateAuthor, UpdateAuthor};

const COLUMNS: &str = "id, nome, created_at, updated_at";

/// Provides CRUD operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// List all authors, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM autor ORDER BY id ASC");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    /// Find an author by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM autor WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Register a new author, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        let query = format!("INSERT INTO autor (nome) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.nome)
            .fetch_one(pool)
            .await
    }

    /// Rename an author by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAuthor,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!(
            "UPDATE autor SET nome = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&input.nome)
            .fetch_optional(pool)
            .await
    }

    /// Delete an author by ID. Returns `true` if a row was deleted.
    ///
    /// Books referencing the author keep existing with `autor_id` NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM autor WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
