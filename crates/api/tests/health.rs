//! Tests for the root banner and the health endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_root_returns_banner(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "API de Biblioteca");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_db_healthy(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}
