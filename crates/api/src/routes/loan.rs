//! Route definitions for loans.

use axum::routing::get;
use axum::Router;

use crate::handlers::loan;
use crate::state::AppState;

/// Routes mounted at `/emprestimos`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(loan::list).post(loan::create))
        .route(
            "/{id}",
            get(loan::get_by_id).put(loan::update).delete(loan::delete),
        )
}
