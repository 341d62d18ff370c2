//! Class types.

use serde::{Deserialize, Serialize};

/// A class as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub id: String,
    pub title: String,
    pub subject: String,
    /// Weekly meeting slot, e.g. "Mon 09:00".
    pub meeting_time: String,
    pub creator_id: String,
    /// Member user ids, creator included.
    pub members: Vec<String>,
}

/// Payload for creating a class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClass {
    pub title: String,
    pub subject: String,
    pub meeting_time: String,
}

/// Payload for adding a member to a class by email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub class_id: String,
    pub email: String,
}
