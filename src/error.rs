use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Password hashing error: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Database(err) => {
                tracing::error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Error::Io(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Error::PasswordHash(err)
    }
}

/// Maps a foreign-key violation to `BadRequest`, leaving every other error as-is.
pub fn foreign_key_violation(err: sqlx::Error, message: &str) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            Error::BadRequest(message.to_string())
        }
        _ => Error::from(err),
    }
}

/// Maps a unique-constraint violation to `BadRequest`; other errors convert
/// as usual.
pub fn unique_violation(err: sqlx::Error, message: &str) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Error::BadRequest(message.to_string())
        }
        _ => Error::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        let err = Error::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn other_sqlx_errors_are_carried_unchanged() {
        let err = Error::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, Error::Database(sqlx::Error::PoolTimedOut)));
    }

    #[test]
    fn non_constraint_errors_pass_through_fk_mapping() {
        let err = foreign_key_violation(sqlx::Error::PoolClosed, "unknown user");
        assert!(matches!(err, Error::Database(sqlx::Error::PoolClosed)));
    }

    #[test]
    fn non_unique_errors_pass_through() {
        let err = unique_violation(sqlx::Error::RowNotFound, "duplicate");
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn status_codes_follow_variant() {
        let resp = Error::NotFound("missing".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = Error::BadRequest("bad".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = Error::Config("nope".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
