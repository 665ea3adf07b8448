//! Handlers for the `/autor` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biblioteca_core::error::CoreError;
use biblioteca_core::types::DbId;
use biblioteca_core::validate;
use biblioteca_db::models::author::{Author, CreateAuthor, UpdateAuthor};
use biblioteca_db::repositories::AuthorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /autor
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = AuthorRepo::list(&state.pool).await?;
    Ok(Json(authors))
}

/// GET /autor/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Author>> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "autor", id })?;
    Ok(Json(author))
}

/// POST /autor
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    input.nome = validate::non_blank("nome", &input.nome)?;
    let author = AuthorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// PUT /autor/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    input.nome = validate::non_blank("nome", &input.nome)?;
    let author = AuthorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "autor", id })?;
    Ok(Json(author))
}

/// DELETE /autor/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<String> {
    let deleted = AuthorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "autor", id }.into());
    }
    Ok("autor removido com sucesso".to_string())
}
