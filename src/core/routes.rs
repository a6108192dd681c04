// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::handlers::health::index_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // Profiles and progression
        .route("/api/user", post(crate::handlers::users::create_user_handler))
        .route("/api/user/{email}", get(crate::handlers::users::get_user_handler))
        .route("/api/update-xp", post(crate::handlers::progression::update_xp_handler))

        // Content
        .route("/api/course", post(crate::handlers::courses::create_course_handler))
        .route("/challenges/programming", get(crate::handlers::challenges::list_challenges_handler))

        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
