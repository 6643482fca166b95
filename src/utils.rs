use axum::http::StatusCode;

use crate::constants::ERR_DATABASE_OPERATION;
use crate::store::StoreError;

/// Maps a store failure to the HTTP boundary. Not-found is the caller's
/// problem; everything else is logged and reported as a server failure.
pub fn store_error_response(err: StoreError) -> (StatusCode, String) {
    match err {
        StoreError::NotFound(id) => (StatusCode::NOT_FOUND, format!("Expense {} not found", id)),
        other => {
            tracing::error!(error = %other, "expense store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ERR_DATABASE_OPERATION.to_string(),
            )
        }
    }
}

pub fn validate_string_length(
    value: &str,
    field_name: &str,
    max_length: usize,
) -> Result<(), (StatusCode, String)> {
    if value.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("{} cannot be empty", field_name),
        ));
    }
    if value.len() > max_length {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("{} must be less than {} characters", field_name, max_length),
        ));
    }
    Ok(())
}
