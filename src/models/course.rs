use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// 24-character hex identifier
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Unix timestamp in seconds
    pub created_at: i64,
    /// Email of the owning user
    pub user: String,
}
