use crate::core::error::{ApiError, EngineError};
use crate::core::state::AppState;
use crate::engine::progression::{apply_xp_gain, XpGrant};
use crate::models::requests::{UpdateXpRequest, UpdateXpResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

/// Grant XP to a user from an NPC or quest
///
/// POST /api/update-xp
/// Body: { "useremail": string, "xpgained": number | numeric string, "npcID": string }
///
/// Absent or empty fields are rejected with 400. A numeric `xpgained` of 0
/// counts as absent, which is what existing clients rely on.
pub async fn update_xp_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateXpRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected update-xp body");
        ApiError::MissingParameters
    })?;

    let grant = validate_update_xp(request)?;

    let updated_user = apply_xp_gain(&*state.database, &grant).map_err(|e| {
        match &e {
            EngineError::Store(store_error) => {
                error!(error = %store_error, email = %grant.user_email, "Error in /update-xp");
            }
            _ => warn!(error = %e, email = %grant.user_email, "Rejected update-xp request"),
        }
        ApiError::from_engine(e)
    })?;

    Ok((
        StatusCode::OK,
        Json(UpdateXpResponse {
            message: "XP and level updated successfully.".to_string(),
            updated_user,
        }),
    )
        .into_response())
}

fn validate_update_xp(request: UpdateXpRequest) -> Result<XpGrant, ApiError> {
    let user_email = request.useremail.filter(|email| !email.is_empty());
    let xp_gained = request.xpgained.filter(|amount| !amount.is_blank());
    let npc_id = request.npc_id.filter(|id| !id.is_empty());

    let (Some(user_email), Some(xp_gained), Some(npc_id)) = (user_email, xp_gained, npc_id) else {
        warn!("update-xp request missing required fields");
        return Err(ApiError::MissingParameters);
    };

    let Some(xp_gained) = xp_gained.to_u64() else {
        warn!(email = %user_email, "update-xp request with non-integer xpgained");
        return Err(ApiError::MissingParameters);
    };

    Ok(XpGrant::new(user_email, xp_gained, npc_id))
}
