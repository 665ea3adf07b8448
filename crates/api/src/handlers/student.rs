//! Handlers for the `/aluno` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biblioteca_core::error::CoreError;
use biblioteca_core::types::DbId;
use biblioteca_core::validate;
use biblioteca_db::models::student::{CreateStudent, Student, UpdateStudent};
use biblioteca_db::repositories::StudentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /aluno
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /aluno/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "aluno", id })?;
    Ok(Json(student))
}

/// POST /aluno
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    input.nome = validate::non_blank("nome", &input.nome)?;
    let student = StudentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /aluno/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    input.nome = validate::non_blank("nome", &input.nome)?;
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "aluno", id })?;
    Ok(Json(student))
}

/// DELETE /aluno/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<String> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "aluno", id }.into());
    }
    Ok("aluno removido com sucesso".to_string())
}
