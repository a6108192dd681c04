// Application state (AppState)

use crate::stores::{challenge_catalog::ChallengeCatalog, database::Database};
use std::sync::Arc;

/// Shared application state
///
/// Handed to every request handler; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Record store for users and courses
    pub database: Arc<Database>,

    /// Programming challenges served read-only
    pub challenges: Arc<ChallengeCatalog>,
}

impl AppState {
    pub fn new(database: Database, challenges: ChallengeCatalog) -> Self {
        Self {
            database: Arc::new(database),
            challenges: Arc::new(challenges),
        }
    }
}
