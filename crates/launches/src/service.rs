//! Launch service: validation, flight-number assignment, persistence.

use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::info;

use launchdeck_domain::{validate, Launch, LaunchRequest, ValidationError};

use crate::planets::{Planet, PlanetsCatalog};
use crate::store::{LaunchStore, StoreError};

/// Errors surfaced by the launch service.
///
/// `Validation` and `LaunchNotFound` are client errors whose display strings
/// go to the client verbatim; `Storage` is an internal failure that is
/// logged and never shown in detail.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Launch not found")]
    LaunchNotFound,

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

/// Orchestrates the validator, the planets catalog, and the launch store.
///
/// The store sits behind a mutex so that validate → assign-flight-number →
/// persist runs as one serialized unit per request; see
/// [`LaunchStore::insert_next`] for the transactional half of that guarantee.
pub struct LaunchService {
    store: Mutex<LaunchStore>,
    catalog: Arc<PlanetsCatalog>,
}

impl LaunchService {
    pub fn new(store: LaunchStore, catalog: Arc<PlanetsCatalog>) -> Self {
        Self {
            store: Mutex::new(store),
            catalog,
        }
    }

    /// Schedule a new launch.
    ///
    /// Rejects early with the validator's reason, otherwise assigns the next
    /// flight number and persists. The returned launch carries the canonical
    /// epoch-millisecond launch date.
    pub fn schedule(&self, request: &LaunchRequest) -> Result<Launch, ServiceError> {
        let validated = validate(request, self.catalog.as_ref())?;

        let mut store = self.lock_store();
        let launch = store.insert_next(validated)?;

        info!(
            flight_number = launch.flight_number,
            mission = %launch.mission,
            target = launch.target.as_deref().unwrap_or(""),
            "Launch scheduled"
        );

        Ok(launch)
    }

    /// All stored launches, ordered by flight number.
    pub fn list(&self) -> Result<Vec<Launch>, ServiceError> {
        Ok(self.lock_store().all()?)
    }

    /// Abort a launch: it stays in the store, marked no longer upcoming and
    /// unsuccessful.
    pub fn abort(&self, flight_number: u32) -> Result<Launch, ServiceError> {
        let aborted = self
            .lock_store()
            .mark_aborted(flight_number)?
            .ok_or(ServiceError::LaunchNotFound)?;

        info!(flight_number, "Launch aborted");

        Ok(aborted)
    }

    /// The valid launch targets.
    pub fn planets(&self) -> &[Planet] {
        self.catalog.all()
    }

    fn lock_store(&self) -> MutexGuard<'_, LaunchStore> {
        // A poisoned lock means a writer panicked mid-request; the store
        // itself is transactional, so continuing is safe.
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
