//! SpaceX launch-history import.
//!
//! Seeds the store with historical SpaceX launches from the public v4 API so
//! a fresh deployment does not start with an empty list. Runs once at
//! startup and skips itself when the history is already present. Imported
//! launches have no target and never pass through validation; scheduling
//! semantics do not depend on this module.

use chrono::DateTime;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use launchdeck_domain::Launch;

use crate::store::{LaunchStore, StoreError};

const SPACEX_QUERY_URL: &str = "https://api.spacexdata.com/v4/launches/query";

/// Flight number and mission of the first SpaceX launch; its presence means
/// the history was imported on an earlier start.
const FIRST_FLIGHT_NUMBER: u32 = 1;
const FIRST_MISSION: &str = "FalconSat";

/// Errors that can occur during the history import
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("SpaceX API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    docs: Vec<LaunchDoc>,
}

#[derive(Debug, Deserialize)]
struct LaunchDoc {
    flight_number: u32,
    name: String,
    date_unix: i64,
    upcoming: bool,
    success: Option<bool>,
    rocket: RocketDoc,
    #[serde(default)]
    payloads: Vec<PayloadDoc>,
}

#[derive(Debug, Deserialize)]
struct RocketDoc {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PayloadDoc {
    #[serde(default)]
    customers: Vec<String>,
}

/// Fetch the SpaceX launch history and persist it, unless already present.
///
/// # Returns
/// * `Ok(count)` - Number of launches written (0 when already seeded)
/// * `Err(ImportError)` - API or storage failure; the caller decides whether
///   that is fatal (the service treats it as a warning)
pub async fn sync_spacex_launches(store: &mut LaunchStore) -> Result<usize, ImportError> {
    let already_seeded = store
        .find_by_flight_number(FIRST_FLIGHT_NUMBER)?
        .is_some_and(|launch| launch.mission == FIRST_MISSION);
    if already_seeded {
        info!("SpaceX launch history already present, skipping import");
        return Ok(0);
    }

    info!(url = SPACEX_QUERY_URL, "Importing SpaceX launch history");

    let query = serde_json::json!({
        "query": {},
        "options": {
            "pagination": false,
            "populate": [
                { "path": "rocket", "select": { "name": 1 } },
                { "path": "payloads", "select": { "customers": 1 } }
            ]
        }
    });

    let response: QueryResponse = reqwest::Client::new()
        .post(SPACEX_QUERY_URL)
        .json(&query)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let mut imported = 0;
    for doc in response.docs {
        let flight_number = doc.flight_number;
        match doc_to_launch(doc) {
            Some(launch) => {
                store.save(&launch)?;
                imported += 1;
            }
            None => warn!(flight_number, "Skipping launch with out-of-range date"),
        }
    }

    info!(imported, "SpaceX launch history imported");

    Ok(imported)
}

fn doc_to_launch(doc: LaunchDoc) -> Option<Launch> {
    let launch_date = DateTime::from_timestamp(doc.date_unix, 0)?;

    let mut customers: Vec<String> = Vec::new();
    for payload in doc.payloads {
        for customer in payload.customers {
            if !customers.contains(&customer) {
                customers.push(customer);
            }
        }
    }

    Some(Launch {
        flight_number: doc.flight_number,
        mission: doc.name,
        rocket: doc.rocket.name,
        target: None,
        launch_date,
        customers,
        upcoming: doc.upcoming,
        success: doc.success.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const SAMPLE_DOC: &str = r#"{
        "flight_number": 1,
        "name": "FalconSat",
        "date_unix": 1143239400,
        "upcoming": false,
        "success": false,
        "rocket": { "name": "Falcon 1" },
        "payloads": [
            { "customers": ["DARPA"] },
            { "customers": ["DARPA", "NASA"] }
        ]
    }"#;

    #[test]
    fn test_doc_maps_to_launch() {
        let doc: LaunchDoc = serde_json::from_str(SAMPLE_DOC).unwrap();
        let launch = doc_to_launch(doc).unwrap();

        assert_eq!(launch.flight_number, 1);
        assert_eq!(launch.mission, "FalconSat");
        assert_eq!(launch.rocket, "Falcon 1");
        assert!(launch.target.is_none());
        assert_eq!(
            launch.launch_date,
            Utc.with_ymd_and_hms(2006, 3, 24, 22, 30, 0).unwrap()
        );
        assert_eq!(launch.customers, vec!["DARPA", "NASA"]);
        assert!(!launch.upcoming);
        assert!(!launch.success);
    }

    #[test]
    fn test_null_success_defaults_false() {
        let doc: LaunchDoc = serde_json::from_str(
            r#"{
                "flight_number": 110,
                "name": "Starlink-99",
                "date_unix": 1700000000,
                "upcoming": true,
                "success": null,
                "rocket": { "name": "Falcon 9" }
            }"#,
        )
        .unwrap();

        let launch = doc_to_launch(doc).unwrap();
        assert!(launch.upcoming);
        assert!(!launch.success);
        assert!(launch.customers.is_empty());
    }
}
