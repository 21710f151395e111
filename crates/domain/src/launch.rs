//! The launch entity and its creation defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flight number assigned to the first launch when the store is empty.
pub const BASE_FLIGHT_NUMBER: u32 = 100;

/// Customers attached to every scheduled launch in addition to any the
/// caller supplies.
pub const DEFAULT_CUSTOMERS: [&str; 2] = ["Zero to Mastery", "NASA"];

/// A scheduled or historical launch.
///
/// `launch_date` crosses the wire as epoch milliseconds so that identical
/// instants compare equal after a serialization round trip, regardless of
/// the textual format the client originally sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    /// Server-assigned unique identifier, strictly increasing.
    pub flight_number: u32,
    /// Mission name.
    pub mission: String,
    /// Rocket name.
    pub rocket: String,
    /// Destination body. Always present on client-created launches;
    /// historical launches imported from the SpaceX API carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Launch instant, epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub launch_date: DateTime<Utc>,
    /// Customer names, caller-supplied entries first.
    pub customers: Vec<String>,
    /// Whether the launch is still in the future.
    pub upcoming: bool,
    /// Whether the launch succeeded (true until proven otherwise).
    pub success: bool,
}

/// Merge caller-supplied customers with [`DEFAULT_CUSTOMERS`].
///
/// Caller entries keep their order; default entries are appended unless an
/// identical entry is already present.
pub fn merge_customers(supplied: Option<Vec<String>>) -> Vec<String> {
    let mut customers = supplied.unwrap_or_default();
    for default in DEFAULT_CUSTOMERS {
        if !customers.iter().any(|c| c == default) {
            customers.push(default.to_string());
        }
    }
    customers
}
