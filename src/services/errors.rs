use async_graphql::{Error as GraphQLError, ErrorExtensions};
use axum::{http::StatusCode, Json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not_found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound => "NOT_FOUND",
            ServiceError::BadRequest(_) => "BAD_REQUEST",
            ServiceError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            ServiceError::Internal(_) => "INTERNAL",
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl ErrorExtensions for ServiceError {
    fn extend(&self) -> GraphQLError {
        let code = self.code();
        GraphQLError::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub fn to_response(err: ServiceError) -> (StatusCode, Json<serde_json::Value>) {
    (
        err.status_code(),
        Json(serde_json::json!({ "error": err.to_string() })),
    )
}
