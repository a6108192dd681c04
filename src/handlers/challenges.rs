use crate::core::state::AppState;
use crate::models::challenge::Challenge;
use axum::{extract::State, Json};
use std::sync::Arc;

/// List every programming challenge
///
/// GET /challenges/programming
pub async fn list_challenges_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Challenge>> {
    Json(state.challenges.list().to_vec())
}
