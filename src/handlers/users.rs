use crate::core::error::{ApiError, EngineError};
use crate::core::state::AppState;
use crate::engine::profiles::{create_or_get_user, get_user};
use crate::models::requests::CreateUserRequest;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

/// Fetch a user profile
///
/// GET /api/user/{email}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Response, ApiError> {
    let user = get_user(&*state.database, &email).map_err(|e| {
        if let EngineError::Store(store_error) = &e {
            error!(error = %store_error, email = %email, "Failed to look up user");
        }
        ApiError::from_engine(e)
    })?;

    Ok((StatusCode::OK, Json(user)).into_response())
}

/// Create a profile, or return the stored one unchanged
///
/// POST /api/user
/// Body: { "email": string, "xp"?: number, "level"?: number }
/// 201 when created, 200 when the email already existed.
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected create-user body");
        ApiError::MissingParameters
    })?;

    let email = request.email.unwrap_or_default();

    let (user, created) = create_or_get_user(&*state.database, &email, request.xp, request.level)
        .map_err(|e| {
            match &e {
                EngineError::Store(store_error) => {
                    error!(error = %store_error, email = %email, "Failed to create user");
                }
                _ => warn!(error = %e, "Rejected create-user request"),
            }
            ApiError::from_engine(e)
        })?;

    let status = if created { StatusCode::CREATED } else { StatusCode::OK };

    Ok((status, Json(user)).into_response())
}
