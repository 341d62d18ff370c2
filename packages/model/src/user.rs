//! User types.
//!
//! [`UserInfo`] is the client-safe projection the session endpoints return —
//! it never carries the password hash or audit timestamps, and its id is a
//! `String` so it works in WASM. [`ProfileAttributes`] is the extra profile
//! data collected at sign-up; [`UpdateAccount`] is the editable subset of the
//! profile.

use serde::{Deserialize, Serialize};

/// User information safe to send to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// "student" or "teacher".
    pub role: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
}

impl UserInfo {
    /// Full display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile fields supplied alongside credentials at sign-up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAttributes {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Editable profile fields. `phone` and `website` are optional; an empty
/// string submitted for either is treated as absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccount {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
}
