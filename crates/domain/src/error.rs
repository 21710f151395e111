//! Validation error taxonomy.
//!
//! The display strings are part of the HTTP contract and are surfaced to
//! clients verbatim; do not reword them without versioning the API.

use thiserror::Error;

/// Reasons a launch-creation request is rejected before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One of mission, rocket, target, launchDate is absent or empty.
    #[error("Missing required launch property")]
    MissingField,

    /// launchDate did not parse as a calendar date.
    #[error("Invalid launch date")]
    InvalidDate,

    /// target does not name a planet in the catalog.
    #[error("No matching planet found")]
    UnknownTarget,
}
