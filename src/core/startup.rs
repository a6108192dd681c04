use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::config::StorageConfig;
use crate::stores::{challenge_catalog::ChallengeCatalog, database::Database};

/// Build the record store handle and connect it (WAL replay happens here)
pub fn open_database(storage: &StorageConfig) -> Result<Database> {
    let database = Database::new(storage.wal_path.clone(), storage.user_capacity);

    let replayed = database.connect()
        .context(format!("Failed to connect record store at '{}'", storage.wal_path.display()))?;

    info!(
        wal_path = %storage.wal_path.display(),
        operations_replayed = replayed,
        users_loaded = database.user_count(),
        courses_loaded = database.course_count(),
        "Record store ready"
    );

    Ok(database)
}

pub fn load_challenges(storage: &StorageConfig) -> Result<ChallengeCatalog> {
    let Some(path) = &storage.challenges_path else {
        warn!("No challenges_path configured, serving an empty challenge list");
        return Ok(ChallengeCatalog::default());
    };

    let catalog = ChallengeCatalog::from_file(path)?;

    info!(
        path = %path.display(),
        challenges = catalog.len(),
        "Challenge catalog loaded"
    );

    Ok(catalog)
}
