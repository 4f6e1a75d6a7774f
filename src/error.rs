use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::{database::StoreError, protocol::ErrorResponse};

/// Errors a handler can answer with. Everything that is not the client's
/// fault collapses into a generic message; the detail only goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn missing_field(field: &str) -> Self {
        ApiError::Validation(format!("Missing field: {}", field))
    }

    pub fn invalid_field(field: &str) -> Self {
        ApiError::Validation(format!("Invalid field: {}", field))
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.to_string(),
            ApiError::Persistence { message, .. } => message.to_string(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence { .. } | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.public_message()))
    }
}

impl From<BlockingError<ApiError>> for ApiError {
    fn from(err: BlockingError<ApiError>) -> Self {
        match err {
            BlockingError::Error(err) => err,
            BlockingError::Canceled => {
                ApiError::Internal(anyhow::anyhow!("blocking task was canceled"))
            }
        }
    }
}
