use std::sync::Arc;
use tracing::{info, warn};

use launchdeck_launches::{sync_spacex_launches, LaunchService, LaunchStore, PlanetsCatalog};

use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub service: LaunchService,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let catalog = Arc::new(PlanetsCatalog::load(&config.planets_csv)?);
        info!(planet_count = catalog.len(), "Planets catalog ready");

        let mut store = LaunchStore::open(&config.database_path)?;

        if config.spacex_sync {
            // Seeding history is best-effort; scheduling works without it.
            if let Err(e) = sync_spacex_launches(&mut store).await {
                warn!("SpaceX history import failed: {}", e);
            }
        }

        let service = LaunchService::new(store, catalog);

        Ok(AppState { config, service })
    }
}
