//! Core functionality shared across the Launchdeck workspace.
//!
//! Currently this is the structured-logging initialization used by every
//! Launchdeck service binary.

pub mod logging;
