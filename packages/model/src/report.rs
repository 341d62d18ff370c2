//! Report types.
//!
//! Reports are immutable after creation: the server inserts the row and the
//! client only ever reads it back.

use serde::{Deserialize, Serialize};

/// A submitted report row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reporter_id: String,
    /// Id of the content being reported.
    pub target_id: String,
    /// "open", "reviewing" or "resolved".
    pub status: String,
    /// What kind of content is being reported, e.g. "note" or "test".
    pub report_type: String,
    pub created_at: String,
}

/// Payload for submitting a report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub target_id: String,
    pub report_type: String,
}
