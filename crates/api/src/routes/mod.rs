//! Route definitions.
//!
//! Routes are mounted at the root (no version prefix); the paths are a
//! published contract. `/categorias` is plural while `/aluno` and
//! `/autor` are singular; clients depend on the mixed naming, so it
//! stays. Newer entities (`/livros`, `/emprestimos`) use plural paths.

pub mod author;
pub mod book;
pub mod category;
pub mod health;
pub mod loan;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the full resource route tree.
///
/// ```text
/// /categorias[/{id}]     category CRUD
/// /aluno[/{id}]          student CRUD
/// /autor[/{id}]          author CRUD
/// /livros[/{id}]         book CRUD
/// /emprestimos[/{id}]    loan CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categorias", category::router())
        .nest("/aluno", student::router())
        .nest("/autor", author::router())
        .nest("/livros", book::router())
        .nest("/emprestimos", loan::router())
}
