//! Repository for the `aluno` table.
//!
//! Every statement here targets `aluno`; student writes must never
//! touch the categoria table.

use biblioteca_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

const COLUMNS: &str = "id, nome, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// List all students, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aluno ORDER BY id ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Find a student by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aluno WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Enroll a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!("INSERT INTO aluno (nome) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.nome)
            .fetch_one(pool)
            .await
    }

    /// Rename a student by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE aluno SET nome = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.nome)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was deleted.
    ///
    /// Open loans for the student are removed by the FK cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM aluno WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
