use crate::core::config::{Config, LoggingConfig, ServerConfig, StorageConfig};
use crate::core::state::AppState;
use crate::models::challenge::Challenge;
use crate::stores::{challenge_catalog::ChallengeCatalog, database::Database};
use std::sync::Arc;
use tempfile::TempDir;

pub fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        server: ServerConfig {
            port: Some(3000),
            unix_socket: None,
            num_threads: 2,
        },
        storage: StorageConfig {
            wal_path: temp_dir.path().join("test.wal"),
            challenges_path: None,
            user_capacity: 16,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
            console: false,
        },
    }
}

pub fn test_challenges() -> ChallengeCatalog {
    ChallengeCatalog::new(vec![
        Challenge {
            id: "fizzbuzz".to_string(),
            title: "FizzBuzz".to_string(),
            description: "Classic".to_string(),
            difficulty: "easy".to_string(),
            xp_reward: 20,
            tags: vec!["loops".to_string()],
        },
        Challenge {
            id: "lru-cache".to_string(),
            title: "LRU Cache".to_string(),
            description: "Evict the least recently used entry".to_string(),
            difficulty: "hard".to_string(),
            xp_reward: 150,
            tags: vec![],
        },
    ])
    .unwrap()
}

/// State with a connected store; keep the TempDir alive for the test's duration
pub fn test_state() -> (Arc<AppState>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let database = Database::new(config.storage.wal_path.clone(), config.storage.user_capacity);
    database.connect().unwrap();

    (Arc::new(AppState::new(database, test_challenges())), temp_dir)
}

/// State whose store was never connected
pub fn disconnected_state() -> (Arc<AppState>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    let database = Database::new(config.storage.wal_path.clone(), config.storage.user_capacity);

    (Arc::new(AppState::new(database, ChallengeCatalog::default())), temp_dir)
}

/// State whose store is connected to a WAL that rejects every write
#[cfg(target_os = "linux")]
pub fn failing_wal_state() -> Arc<AppState> {
    use crate::wal::wal::Wal;
    use std::path::PathBuf;

    let database = Database::new(PathBuf::from("/dev/full"), 16);
    database.connect_with(Wal::new(PathBuf::from("/dev/full")).unwrap());

    Arc::new(AppState::new(database, test_challenges()))
}
