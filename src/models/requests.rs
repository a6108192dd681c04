use crate::models::course::Course;
use crate::models::user::UserRecord;
use serde::{Deserialize, Serialize};

/// XP amount as sent by clients: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum XpAmount {
    Number(serde_json::Number),
    Text(String),
}

impl XpAmount {
    /// Zero as a JSON number and the empty string count as absent.
    /// A string "0" is present and yields zero.
    pub fn is_blank(&self) -> bool {
        match self {
            XpAmount::Number(n) => n.as_u64() == Some(0) || n.as_f64() == Some(0.0),
            XpAmount::Text(s) => s.is_empty(),
        }
    }

    /// Non-negative integer value, or None when the input is not one
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            XpAmount::Number(n) => n.as_u64(),
            XpAmount::Text(s) => s.trim().parse::<u64>().ok(),
        }
    }
}

/// POST /api/update-xp
#[derive(Debug, Deserialize)]
pub struct UpdateXpRequest {
    pub useremail: Option<String>,
    pub xpgained: Option<XpAmount>,
    #[serde(rename = "npcID")]
    pub npc_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateXpResponse {
    pub message: String,
    pub updated_user: UserRecord,
}

/// POST /api/user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    #[serde(default)]
    pub xp: u64,
    pub level: Option<u32>,
}

/// POST /api/course
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub email: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCourseResponse {
    pub message: String,
    pub course: Course,
}
