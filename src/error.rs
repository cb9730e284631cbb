use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("User already exists")]
    AlreadyExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unauthorized")]
    Unauthorized,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request format")]
    MalformedInput,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedInput => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Store(StoreError::AlreadyExists) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            AppError::Store(StoreError::Unauthorized) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_response = serde_json::json!({
            "status": "fail",
            "message": self.to_string(),
        });
        (self.status(), Json(error_response)).into_response()
    }
}
