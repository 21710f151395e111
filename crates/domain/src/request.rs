//! The structured launch-creation request.

use serde::{Deserialize, Serialize};

/// Client payload for scheduling a launch.
///
/// Every field is optional at this layer; [`crate::validate`] decides which
/// absences are errors. Keeping the wire type loose means a malformed body
/// still deserializes and gets a deterministic validation message instead of
/// a framework-shaped 422.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub mission: Option<String>,
    pub rocket: Option<String>,
    pub target: Option<String>,
    /// Launch date as sent, e.g. "January 1, 2030" or an RFC 3339 timestamp.
    pub launch_date: Option<String>,
    pub customers: Option<Vec<String>>,
}
