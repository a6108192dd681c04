use crate::core::error::{ApiError, EngineError};
use crate::core::state::AppState;
use crate::engine::courses::create_course;
use crate::models::requests::{CreateCourseRequest, CreateCourseResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

/// Create a course for an existing user
///
/// POST /api/course
/// Body: { "email": string, "title": string, "topics": [string] }
pub async fn create_course_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected create-course body");
        ApiError::MissingParameters
    })?;

    let email = request.email.unwrap_or_default();
    let title = request.title.unwrap_or_default();

    let course = create_course(&state.database, &email, &title, request.topics).map_err(|e| {
        match &e {
            EngineError::Store(store_error) => {
                error!(error = %store_error, email = %email, "Failed to create course");
            }
            _ => warn!(error = %e, "Rejected create-course request"),
        }
        ApiError::from_course_engine(e)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCourseResponse {
            message: "Course created".to_string(),
            course,
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{disconnected_state, test_state};
    use crate::models::user::UserRecord;
    use crate::stores::user_store::UserStore;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use serde_json::json;

    fn request(body: serde_json::Value) -> Result<Json<CreateCourseRequest>, JsonRejection> {
        Ok(Json(serde_json::from_value(body).unwrap()))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let (_, body) = response.into_parts();
        let bytes = Body::new(body).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_course() {
        let (state, _dir) = test_state();
        state.database.insert_user_if_absent(UserRecord::new("a@x.com", 0, 1)).unwrap();

        let response = create_course_handler(
            State(state.clone()),
            request(json!({ "email": "a@x.com", "title": "Rust", "topics": ["borrowing"] })),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Course created");
        assert_eq!(body["course"]["title"], "Rust");
        assert_eq!(body["course"]["topics"], json!(["borrowing"]));
        assert_eq!(body["course"]["user"], "a@x.com");
        assert!(body["course"]["createdAt"].as_i64().unwrap() > 0);
        assert_eq!(state.database.course_count(), 1);
    }

    #[tokio::test]
    async fn test_create_course_unknown_user() {
        let (state, _dir) = test_state();

        let err = create_course_handler(
            State(state.clone()),
            request(json!({ "email": "ghost@x.com", "title": "Rust" })),
        )
        .await
        .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "No user found");
    }

    #[tokio::test]
    async fn test_create_course_store_unavailable() {
        let (state, _dir) = disconnected_state();

        let err = create_course_handler(
            State(state),
            request(json!({ "email": "a@x.com", "title": "Rust" })),
        )
        .await
        .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Something went wrong");
    }
}
