//! Handlers for the `/livros` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biblioteca_core::error::CoreError;
use biblioteca_core::types::DbId;
use biblioteca_core::validate;
use biblioteca_db::models::book::{Book, CreateBook, UpdateBook};
use biblioteca_db::repositories::BookRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /livros
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::list(&state.pool).await?;
    Ok(Json(books))
}

/// GET /livros/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Book>> {
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "livro", id })?;
    Ok(Json(book))
}

/// POST /livros
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    input.nome = validate::non_blank("nome", &input.nome)?;
    if let Some(autor_id) = input.autor_id {
        validate::positive_id("autor_id", autor_id)?;
    }
    if let Some(categoria_id) = input.categoria_id {
        validate::positive_id("categoria_id", categoria_id)?;
    }
    let book = BookRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /livros/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    if let Some(nome) = &input.nome {
        input.nome = Some(validate::non_blank("nome", nome)?);
    }
    if let Some(autor_id) = input.autor_id {
        validate::positive_id("autor_id", autor_id)?;
    }
    if let Some(categoria_id) = input.categoria_id {
        validate::positive_id("categoria_id", categoria_id)?;
    }
    let book = BookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "livro", id })?;
    Ok(Json(book))
}

/// DELETE /livros/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<String> {
    let deleted = BookRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "livro", id }.into());
    }
    Ok("livro removido com sucesso".to_string())
}
