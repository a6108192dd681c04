use crate::core::error::EngineError;
use crate::engine::levels::level_for;
use crate::models::user::UserRecord;
use crate::stores::user_store::UserStore;
use tracing::info;

/// A single XP award from one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpGrant {
    pub user_email: String,
    pub xp_gained: u64,
    pub source_id: String,
}

impl XpGrant {
    pub fn new(user_email: impl Into<String>, xp_gained: u64, source_id: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            xp_gained,
            source_id: source_id.into(),
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.user_email.trim().is_empty() {
            return Err(EngineError::MissingParameter("useremail"));
        }
        if self.source_id.trim().is_empty() {
            return Err(EngineError::MissingParameter("npcID"));
        }
        Ok(())
    }
}

/// Add XP to a user, recompute the level and record the source
///
/// Unseen emails are created on the fly. The whole update runs as one store
/// operation, so `level == level_for(xp)` holds for every committed record.
pub fn apply_xp_gain<S: UserStore + ?Sized>(store: &S, grant: &XpGrant) -> Result<UserRecord, EngineError> {
    grant.validate()?;

    let mut previous_level = 0;
    let updated = store.upsert_user_with(&grant.user_email, &mut |user: &mut UserRecord| {
        previous_level = user.level;
        user.xp = user.xp.saturating_add(grant.xp_gained);
        user.level = level_for(user.xp);
        user.add_npc_id(&grant.source_id);
    })?;

    info!(
        email = %updated.email,
        xp_gained = grant.xp_gained,
        source_id = %grant.source_id,
        xp = updated.xp,
        level = updated.level,
        leveled_up = updated.level > previous_level && previous_level > 0,
        "XP applied"
    );

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::StoreError;
    use crate::stores::database::Database;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn connected(temp_dir: &TempDir) -> Database {
        let db = Database::new(temp_dir.path().join("progression.wal"), 16);
        db.connect().unwrap();
        db
    }

    #[test]
    fn test_new_user_gains_xp() {
        let temp_dir = TempDir::new().unwrap();
        let db = connected(&temp_dir);

        let user = apply_xp_gain(&db, &XpGrant::new("a@x.com", 60, "npc1")).unwrap();

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.xp, 60);
        assert_eq!(user.level, 2);
        assert_eq!(user.npc_ids, vec!["npc1".to_string()]);
    }

    #[test]
    fn test_existing_user_crosses_threshold() {
        let temp_dir = TempDir::new().unwrap();
        let db = connected(&temp_dir);

        let mut seeded = UserRecord::new("c@x.com", 45, 1);
        seeded.add_npc_id("npc1");
        db.insert_user_if_absent(seeded).unwrap();

        let user = apply_xp_gain(&db, &XpGrant::new("c@x.com", 10, "npc2")).unwrap();

        assert_eq!(user.xp, 55);
        assert_eq!(user.level, 2);
        assert_eq!(user.npc_ids, vec!["npc1".to_string(), "npc2".to_string()]);
    }

    #[test]
    fn test_level_corrected_for_inconsistent_record() {
        let temp_dir = TempDir::new().unwrap();
        let db = connected(&temp_dir);

        // Profile bootstrap accepts any level
        db.insert_user_if_absent(UserRecord::new("b@x.com", 100, 5)).unwrap();

        let user = apply_xp_gain(&db, &XpGrant::new("b@x.com", 25, "npc1")).unwrap();
        assert_eq!(user.xp, 125);
        assert_eq!(user.level, 3);
    }

    #[test]
    fn test_repeated_source_keeps_tag_set_size() {
        let temp_dir = TempDir::new().unwrap();
        let db = connected(&temp_dir);

        apply_xp_gain(&db, &XpGrant::new("a@x.com", 5, "npc1")).unwrap();
        let first = apply_xp_gain(&db, &XpGrant::new("a@x.com", 0, "npc1")).unwrap();
        let second = apply_xp_gain(&db, &XpGrant::new("a@x.com", 0, "npc1")).unwrap();

        assert_eq!(first.npc_ids.len(), 1);
        assert_eq!(second, first);
    }

    #[test]
    fn test_zero_grant_initializes_level() {
        let temp_dir = TempDir::new().unwrap();
        let db = connected(&temp_dir);

        let user = apply_xp_gain(&db, &XpGrant::new("z@x.com", 0, "npc1")).unwrap();
        assert_eq!(user.xp, 0);
        assert_eq!(user.level, 1);
    }

    #[test]
    fn test_level_matches_xp_after_every_grant() {
        let temp_dir = TempDir::new().unwrap();
        let db = connected(&temp_dir);

        for (step, amount) in [1u64, 49, 70, 80, 333, 1000, 2667, 10_000].iter().enumerate() {
            let source = format!("npc{}", step % 3);
            let user = apply_xp_gain(&db, &XpGrant::new("a@x.com", *amount, source)).unwrap();
            assert_eq!(user.level, level_for(user.xp));
        }

        let user = db.find_user("a@x.com").unwrap().unwrap();
        assert_eq!(user.xp, 14_200);
        assert_eq!(user.level, 20);
        assert_eq!(user.npc_ids.len(), 3);
    }

    #[test]
    fn test_xp_saturates() {
        let temp_dir = TempDir::new().unwrap();
        let db = connected(&temp_dir);

        db.insert_user_if_absent(UserRecord::new("max@x.com", u64::MAX - 1, 20)).unwrap();
        let user = apply_xp_gain(&db, &XpGrant::new("max@x.com", 10, "npc1")).unwrap();

        assert_eq!(user.xp, u64::MAX);
        assert_eq!(user.level, 20);
    }

    #[test]
    fn test_missing_parameters_do_not_mutate() {
        let temp_dir = TempDir::new().unwrap();
        let db = connected(&temp_dir);

        let err = apply_xp_gain(&db, &XpGrant::new("a@x.com", 10, "")).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameter("npcID")));

        let err = apply_xp_gain(&db, &XpGrant::new("  ", 10, "npc1")).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameter("useremail")));

        assert_eq!(db.user_count(), 0);
    }

    #[test]
    fn test_store_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("progression.wal"), 16);

        let err = apply_xp_gain(&db, &XpGrant::new("a@x.com", 10, "npc1")).unwrap_err();
        assert!(matches!(err, EngineError::Store(StoreError::Unavailable)));
    }

    #[test]
    fn test_concurrent_grants_sum_exactly() {
        let temp_dir = TempDir::new().unwrap();
        let db = Arc::new(connected(&temp_dir));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let db = Arc::clone(&db);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let grant = XpGrant::new("busy@x.com", 3, format!("npc{}", worker));
                        let user = apply_xp_gain(&*db, &grant).unwrap();
                        assert_eq!(user.level, level_for(user.xp));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let user = db.find_user("busy@x.com").unwrap().unwrap();
        assert_eq!(user.xp, 8 * 50 * 3);
        assert_eq!(user.level, level_for(1200));
        assert_eq!(user.npc_ids.len(), 8);
    }
}
