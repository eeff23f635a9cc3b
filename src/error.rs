use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Material {0} not found")]
    MaterialNotFound(String),

    #[error("Project {0} not found")]
    ProjectNotFound(String),

    #[error("Both lat and lon are required to locate a reference point")]
    PartialCoordinate,

    #[error("lat and lon must be finite numbers")]
    InvalidCoordinate,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MaterialNotFound(_) | AppError::ProjectNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PartialCoordinate | AppError::InvalidCoordinate => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Database(e) = &self {
            error!("Database failure while serving request: {}", e);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
