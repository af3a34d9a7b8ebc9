use crate::views;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DiagnosisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0} not found")]
    NotFound(String),

    /// Shown to the person who submitted the form, e.g. an empty diagnosis.
    #[error("{0}")]
    Unprocessable(String),

    #[error("The database is currently unavailable, please try again shortly")]
    StoreUnavailable(String),

    #[error("Something went wrong on our side")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, views::message_page(status, &self.to_string())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => {
                tracing::error!("Database unreachable: {}", err);
                AppError::StoreUnavailable(err.to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::BadRequest("That record already exists".to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest("The referenced disease or symptom does not exist".to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
                AppError::BadRequest("The submitted values are out of range".to_string())
            }
            _ => {
                tracing::error!("Database error: {}", err);
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl From<DiagnosisError> for AppError {
    fn from(err: DiagnosisError) -> Self {
        match err {
            DiagnosisError::InvalidInput | DiagnosisError::NoMatch => {
                AppError::Unprocessable(err.to_string())
            }
            DiagnosisError::StoreUnavailable(e) => {
                tracing::error!("Diagnosis failed: {}", e);
                AppError::StoreUnavailable(e.to_string())
            }
        }
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        tracing::error!("Session error: {}", err);
        AppError::Internal(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("{:#}", err);
        AppError::Internal(err.to_string())
    }
}
