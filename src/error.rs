use crate::store::{StoreError, COMPANY_CODE_KEY, COMPANY_NAME_KEY};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use serde_json::json;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Every handler failure ends up here and is rendered as
/// `{"error": {"message": ..., "status": ...}}`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] eyre::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { constraint } => {
                let message = match constraint.as_deref() {
                    Some(COMPANY_CODE_KEY) => "A company with that code already exists",
                    Some(COMPANY_NAME_KEY) => "A company with that name already exists",
                    _ => "Record already exists",
                };
                ApiError::Conflict(message.to_owned())
            }
            StoreError::Constraint { .. } => {
                ApiError::BadRequest("Request violates a data constraint".to_owned())
            }
            database @ StoreError::Database(_) => ApiError::Unexpected(eyre::Report::new(database)),
        }
    }
}

impl ApiError {
    fn public_message(&self) -> String {
        match self {
            ApiError::Unexpected(_) => INTERNAL_MESSAGE.to_owned(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{:?}", self);
        } else {
            warn!("{}: {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(json!({
            "error": {
                "message": self.public_message(),
                "status": status.as_u16(),
            }
        }))
    }
}
