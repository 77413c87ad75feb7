use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum AppError {
    BadRequest(String),
    EmployeeNotFound { id: String },
    InternalServerError(String),
    Configuration(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct EmployeeNotFoundResponse<'a> {
    id: &'a str,
    message: String,
}

impl AppError {
    pub fn employee_not_found(id: impl Into<String>) -> Self {
        AppError::EmployeeNotFound { id: id.into() }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::EmployeeNotFound { id } => write!(f, "Employee not found: {}", id),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::EmployeeNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse { error: msg.clone() }),
            AppError::EmployeeNotFound { id } => HttpResponse::NotFound().json(EmployeeNotFoundResponse {
                id,
                message: self.to_string(),
            }),
            // Internal details stay in the server log.
            AppError::InternalServerError(_) | AppError::Configuration(_) => HttpResponse::InternalServerError()
                .json(ErrorResponse { error: "Internal Server Error".to_string() }),
        }
    }
}
