//! Domain model for Launchdeck: the launch entity, the structured creation
//! request, date parsing, and the pure validation rules applied before a
//! launch is ever persisted.

pub mod date;
pub mod error;
pub mod launch;
pub mod request;
pub mod validate;

pub use date::parse_launch_date;
pub use error::ValidationError;
pub use launch::{merge_customers, Launch, BASE_FLIGHT_NUMBER, DEFAULT_CUSTOMERS};
pub use request::LaunchRequest;
pub use validate::{validate, TargetLookup, ValidatedLaunch};
