//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for `PUT` requests
//!
//! Field names are Portuguese where they name wire/database columns
//! (`nome`, `aluno_id`, ...) since rows are serialized as-is.

pub mod author;
pub mod book;
pub mod category;
pub mod loan;
pub mod student;
