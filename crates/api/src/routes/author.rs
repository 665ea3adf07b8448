//! Route definitions for authors.

use axum::routing::get;
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

/// Routes mounted at `/autor`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(author::list).post(author::create))
        .route(
            "/{id}",
            get(author::get_by_id)
                .put(author::update)
                .delete(author::delete),
        )
}
