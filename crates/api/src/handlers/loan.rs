//! Handlers for the `/emprestimos` resource.
//!
//! Creating a loan checks a book out; updating it records the return.
//! A nonexistent `aluno_id`/`livro_id` on create fails the database FK
//! check and surfaces as 500.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biblioteca_core::error::CoreError;
use biblioteca_core::types::DbId;
use biblioteca_core::validate;
use biblioteca_db::models::loan::{CreateLoan, Loan, UpdateLoan};
use biblioteca_db::repositories::LoanRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /emprestimos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = LoanRepo::list(&state.pool).await?;
    Ok(Json(loans))
}

/// GET /emprestimos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Loan>> {
    let loan = LoanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "emprestimo",
            id,
        })?;
    Ok(Json(loan))
}

/// POST /emprestimos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    validate::positive_id("aluno_id", input.aluno_id)?;
    validate::positive_id("livro_id", input.livro_id)?;
    let loan = LoanRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// PUT /emprestimos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLoan>,
) -> AppResult<Json<Loan>> {
    let loan = LoanRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "emprestimo",
            id,
        })?;
    Ok(Json(loan))
}

/// DELETE /emprestimos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<String> {
    let deleted = LoanRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "emprestimo",
            id,
        }
        .into());
    }
    Ok("emprestimo removido com sucesso".to_string())
}
