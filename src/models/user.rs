use serde::{Deserialize, Serialize};

/// User document as persisted and returned to clients
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Primary key
    pub email: String,
    /// Cumulative experience points
    pub xp: u64,
    /// Level derived from `xp`; 0 only before the first progression update
    pub level: u32,
    /// Sources that have granted XP, in first-seen order without duplicates
    #[serde(rename = "npcIDs", default)]
    pub npc_ids: Vec<String>,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, xp: u64, level: u32) -> Self {
        Self {
            email: email.into(),
            xp,
            level,
            npc_ids: Vec::new(),
        }
    }

    /// Record placed in the store for an unseen email before its first XP grant
    pub fn uninitialized(email: impl Into<String>) -> Self {
        Self::new(email, 0, 0)
    }

    /// Insert a source id into the tag set
    /// Returns false if it was already present
    pub fn add_npc_id(&mut self, npc_id: &str) -> bool {
        if self.npc_ids.iter().any(|existing| existing == npc_id) {
            return false;
        }
        self.npc_ids.push(npc_id.to_string());
        true
    }
}
