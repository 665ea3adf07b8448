//! Contract tests for the error taxonomy: 400 for validation
//! failures, 404 for missing rows (never 500), 500 for query
//! failures.

mod common;

use axum::http::StatusCode;
use common::{body_text, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Validation -> 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_nome_on_create_is_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/categorias", serde_json::json!({"nome": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written
    let app = common::build_test_app(pool);
    let response = get(app, "/categorias").await;
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_nome_on_update_is_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = common::body_json(
        post_json(app, "/categorias", serde_json::json!({"nome": "Ficção"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/categorias/{id}"), serde_json::json!({"nome": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Row untouched
    let app = common::build_test_app(pool);
    let fetched = common::body_json(get(app, &format!("/categorias/{id}")).await).await;
    assert_eq!(fetched["nome"], "Ficção");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categorias/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_nome_field_is_client_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/categorias", serde_json::json!({})).await;
    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_positive_loan_reference_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/emprestimos",
        serde_json::json!({"aluno_id": 0, "livro_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// NotFound -> 404, never 500
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_returns_404(pool: PgPool) {
    for path in [
        "/categorias/999999",
        "/aluno/999999",
        "/autor/999999",
        "/livros/999999",
        "/emprestimos/999999",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/categorias/999999", serde_json::json!({"nome": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/categorias/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, "/emprestimos/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_not_found_body_names_the_entity(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categorias/999999").await;
    let text = body_text(response).await;
    assert!(text.contains("categoria"));
    assert!(text.contains("999999"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/editoras").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// QueryFailure -> 500
// ---------------------------------------------------------------------------

/// A loan referencing rows that do not exist passes validation but
/// fails the FK check; constraint violations surface as 500 by design.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_loan_fk_violation_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/emprestimos",
        serde_json::json!({"aluno_id": 999999, "livro_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = body_text(response).await;
    assert_eq!(text, "erro interno no servidor");
}
