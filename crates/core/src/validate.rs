//! Input validation helpers.
//!
//! Requests are validated before any SQL runs, so a missing or blank
//! `nome` surfaces as a 400 instead of a database-level rejection.

use crate::error::CoreError;
use crate::types::DbId;

/// Validate that a required text field is present and non-blank.
///
/// Returns the trimmed value on success.
pub fn non_blank(field: &'static str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!(
            "campo obrigatório '{field}' vazio"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate that a referenced id is positive.
///
/// BIGSERIAL keys start at 1; zero or negative ids can never match a
/// row, so reject them up front.
pub fn positive_id(field: &'static str, value: DbId) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "campo '{field}' deve ser um id positivo"
        )));
    }
    Ok(())
}
