use crate::core::error::EngineError;
use crate::engine::levels::level_for;
use crate::models::user::UserRecord;
use crate::stores::user_store::UserStore;
use tracing::{debug, info};

pub fn get_user<S: UserStore + ?Sized>(store: &S, email: &str) -> Result<UserRecord, EngineError> {
    store
        .find_user(email)?
        .ok_or_else(|| EngineError::NotFound(email.to_string()))
}

/// Create a profile unless one exists for `email`
///
/// An existing record is returned untouched, whatever `xp` and `level` say.
/// When `level` is omitted it is derived from `xp`. The flag reports whether
/// the record was created.
pub fn create_or_get_user<S: UserStore + ?Sized>(
    store: &S,
    email: &str,
    xp: u64,
    level: Option<u32>,
) -> Result<(UserRecord, bool), EngineError> {
    if email.trim().is_empty() {
        return Err(EngineError::MissingParameter("email"));
    }

    let level = level.unwrap_or_else(|| level_for(xp));
    let (user, created) = store.insert_user_if_absent(UserRecord::new(email, xp, level))?;

    if created {
        info!(email = %user.email, xp = user.xp, level = user.level, "User created");
    } else {
        debug!(email = %user.email, "User already exists, returning stored profile");
    }

    Ok((user, created))
}
