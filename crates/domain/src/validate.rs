//! Pure validation of launch-creation requests.

use chrono::{DateTime, Utc};

use crate::date::parse_launch_date;
use crate::error::ValidationError;
use crate::launch::merge_customers;
use crate::request::LaunchRequest;

/// Read-only membership check against the planets catalog.
///
/// The catalog itself lives in the storage crate; validation only needs to
/// ask whether a target name exists.
pub trait TargetLookup {
    fn exists(&self, name: &str) -> bool;
}

/// A request that passed validation, ready to become a [`crate::Launch`]
/// once the store assigns it a flight number.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLaunch {
    pub mission: String,
    pub rocket: String,
    pub target: String,
    pub launch_date: DateTime<Utc>,
    pub customers: Vec<String>,
}

/// Validate a creation request against the required-field rules and the
/// planets catalog.
///
/// Checks run in a fixed order and stop at the first failure, so a request
/// with several problems always reports the same one:
/// missing fields, then the date parse, then target membership.
pub fn validate(
    request: &LaunchRequest,
    targets: &impl TargetLookup,
) -> Result<ValidatedLaunch, ValidationError> {
    let mission = required(&request.mission)?;
    let rocket = required(&request.rocket)?;
    let target = required(&request.target)?;
    let raw_date = required(&request.launch_date)?;

    let launch_date = parse_launch_date(raw_date).ok_or(ValidationError::InvalidDate)?;

    if !targets.exists(target) {
        return Err(ValidationError::UnknownTarget);
    }

    Ok(ValidatedLaunch {
        mission: mission.to_string(),
        rocket: rocket.to_string(),
        target: target.to_string(),
        launch_date,
        customers: merge_customers(request.customers.clone()),
    })
}

fn required(field: &Option<String>) -> Result<&str, ValidationError> {
    match field.as_deref() {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField),
    }
}
