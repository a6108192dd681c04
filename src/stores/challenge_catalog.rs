use crate::models::challenge::Challenge;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Read-only list of programming challenges, kept in file order
#[derive(Debug, Default)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl ChallengeCatalog {
    pub fn new(challenges: Vec<Challenge>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(challenges.len());
        for challenge in &challenges {
            if !seen.insert(challenge.id.as_str()) {
                bail!("Duplicate challenge id '{}'", challenge.id);
            }
        }

        Ok(Self { challenges })
    }

    /// Load a JSON array of challenges
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read challenges file: {}", path.display()))?;

        let challenges: Vec<Challenge> = serde_json::from_str(&content)
            .context(format!("Failed to parse challenges file: {}", path.display()))?;

        Self::new(challenges)
    }

    pub fn list(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}
