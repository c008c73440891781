use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::store::StoreError;

pub const LOG_NOT_FOUND_MSG: &str = "Log not found";

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    UnprocessableEntity(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::UnprocessableEntity(msg) => write!(f, "Unprocessable Entity: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            AppError::NotFound(msg) => msg,
            AppError::UnprocessableEntity(msg) => msg,
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { detail: detail.clone() })
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                log::warn!("Log {} not found", id);
                AppError::NotFound(LOG_NOT_FOUND_MSG.to_string())
            }
        }
    }
}
