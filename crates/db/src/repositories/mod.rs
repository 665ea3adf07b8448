//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lookup misses are
//! `Ok(None)`, delete reports whether a row matched; anything else is
//! a driver error the caller maps to HTTP 500.

pub mod author_repo;
pub mod book_repo;
pub mod category_repo;
pub mod loan_repo;
pub mod student_repo;

pub use author_repo::AuthorRepo;
pub use book_repo::BookRepo;
pub use category_repo::CategoryRepo;
pub use loan_repo::LoanRepo;
pub use student_repo::StudentRepo;
