//! Launch scheduling for Launchdeck: the SQLite-backed launch store, the
//! habitable-planets catalog, the service orchestrating validation and
//! flight-number assignment, and the SpaceX history importer.

pub mod importer;
pub mod planets;
pub mod service;
pub mod store;

pub use importer::{sync_spacex_launches, ImportError};
pub use planets::{CatalogError, Planet, PlanetsCatalog};
pub use service::{LaunchService, ServiceError};
pub use store::{LaunchStore, StoreError};
