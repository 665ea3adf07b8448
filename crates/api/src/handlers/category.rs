//! Handlers for the `/categorias` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use biblioteca_core::error::CoreError;
use biblioteca_core::types::DbId;
use biblioteca_core::validate;
use biblioteca_db::models::category::{Category, CreateCategory, UpdateCategory};
use biblioteca_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /categorias
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /categorias/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "categoria",
            id,
        })?;
    Ok(Json(category))
}

/// POST /categorias
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    input.nome = validate::non_blank("nome", &input.nome)?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categorias/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    input.nome = validate::non_blank("nome", &input.nome)?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "categoria",
            id,
        })?;
    Ok(Json(category))
}

/// DELETE /categorias/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<String> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "categoria",
            id,
        }
        .into());
    }
    Ok("categoria removida com sucesso".to_string())
}
