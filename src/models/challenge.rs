use serde::{Deserialize, Serialize};

/// A programming challenge from the read-only catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    #[serde(default)]
    pub xp_reward: u64,
    #[serde(default)]
    pub tags: Vec<String>,
}
