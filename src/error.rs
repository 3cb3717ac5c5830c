use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Failures of a signup request, rendered as `{"message": ...}` bodies.
///
/// Internal failures keep their cause for the log but only show a generic message.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("Internal server error")]
    Database(DieselError),

    #[error("Internal server error")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Internal server error")]
    Blocking(#[from] BlockingError),
}

impl From<DieselError> for SignupError {
    fn from(error: DieselError) -> Self {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                SignupError::DuplicateEmail
            }
            other => SignupError::Database(other),
        }
    }
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupError::Validation(_) => StatusCode::BAD_REQUEST,
            SignupError::DuplicateEmail => StatusCode::CONFLICT,
            SignupError::NotFound => StatusCode::NOT_FOUND,
            SignupError::Pool(_)
            | SignupError::Database(_)
            | SignupError::Hash(_)
            | SignupError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SignupError::Pool(e) => log::error!("database pool error: {e}"),
            SignupError::Database(e) => log::error!("database error: {e}"),
            SignupError::Hash(e) => log::error!("password hashing error: {e}"),
            SignupError::Blocking(e) => log::error!("blocking task error: {e}"),
            _ => log::debug!("signup rejected: {self}"),
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string(),
        }))
    }
}
