// Centralized error handling for the progression service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record store is not connected")]
    Unavailable,

    #[error("Record store write failed: {0}")]
    Persistence(#[from] anyhow::Error),
}

/// Errors raised by the progression, profile and course operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors returned to HTTP clients
///
/// The display strings are the exact messages clients receive.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required query parameters.")]
    MissingParameters,

    #[error("User not found")]
    UserNotFound,

    #[error("No user found")]
    CourseOwnerNotFound,

    #[error("Not found")]
    RouteNotFound,

    #[error("Something went wrong")]
    CourseFailed,

    #[error("Internal server error.")]
    InternalError,
}

impl ApiError {
    /// Map an engine failure onto the response used by the progression endpoints
    pub fn from_engine(err: EngineError) -> Self {
        match err {
            EngineError::MissingParameter(_) => ApiError::MissingParameters,
            EngineError::NotFound(_) => ApiError::UserNotFound,
            EngineError::Store(_) => ApiError::InternalError,
        }
    }

    /// Map an engine failure onto the response used by course creation
    pub fn from_course_engine(err: EngineError) -> Self {
        match err {
            EngineError::MissingParameter(_) => ApiError::MissingParameters,
            EngineError::NotFound(_) => ApiError::CourseOwnerNotFound,
            EngineError::Store(_) => ApiError::CourseFailed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match &self {
            ApiError::MissingParameters => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            // Profile lookups report absence under "message"
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, json!({ "message": message })),
            ApiError::CourseOwnerNotFound => (StatusCode::NOT_FOUND, json!({ "error": message })),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, json!({ "error": message })),
            ApiError::CourseFailed => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message })),
            ApiError::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message })),
        };

        (status, Json(body)).into_response()
    }
}
