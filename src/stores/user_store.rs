use crate::core::error::StoreError;
use crate::models::user::UserRecord;

/// Persistence for user records keyed by email
pub trait UserStore: Send + Sync {
    fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Insert `record` unless a record with the same email exists.
    /// Returns the stored record and whether it was created.
    fn insert_user_if_absent(&self, record: UserRecord) -> Result<(UserRecord, bool), StoreError>;

    /// Apply `update` to the record for `email` as one atomic read-modify-write.
    /// An unseen email starts from [`UserRecord::uninitialized`].
    fn upsert_user_with(
        &self,
        email: &str,
        update: &mut dyn FnMut(&mut UserRecord),
    ) -> Result<UserRecord, StoreError>;
}
