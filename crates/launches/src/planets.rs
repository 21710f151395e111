//! Habitable-planets catalog.
//!
//! Loaded once at startup from the Kepler cumulative KOI dataset and queried
//! read-only afterwards. A row qualifies as a habitable candidate when the
//! disposition is CONFIRMED, the stellar flux is between 0.36 and 1.11 Earth
//! flux, and the planetary radius is below 1.6 Earth radii.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use launchdeck_domain::TargetLookup;

/// A valid launch target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub kepler_name: String,
}

/// Errors that can occur while loading the planets dataset
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read planets dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed planets dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the KOI dataset; columns we do not filter on are ignored.
#[derive(Debug, Deserialize)]
struct KoiRow {
    koi_disposition: String,
    koi_insol: Option<f64>,
    koi_prad: Option<f64>,
    kepler_name: Option<String>,
}

impl KoiRow {
    fn is_habitable(&self) -> bool {
        self.koi_disposition == "CONFIRMED"
            && self.koi_insol.is_some_and(|insol| insol > 0.36 && insol < 1.11)
            && self.koi_prad.is_some_and(|prad| prad < 1.6)
    }
}

/// Read-only catalog of valid launch targets.
pub struct PlanetsCatalog {
    planets: Vec<Planet>,
    names: HashSet<String>,
}

impl PlanetsCatalog {
    /// Load the catalog from a KOI CSV file, keeping habitable rows only.
    ///
    /// Comment lines (leading `#`) in the raw dataset are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .from_path(path)?;

        let mut planets = Vec::new();
        for row in reader.deserialize::<KoiRow>() {
            let row = row?;
            if !row.is_habitable() {
                continue;
            }
            if let Some(kepler_name) = row.kepler_name.filter(|n| !n.is_empty()) {
                planets.push(Planet { kepler_name });
            }
        }

        info!(
            path = %path.display(),
            planet_count = planets.len(),
            "Planets catalog loaded"
        );

        Ok(Self::from_planets(planets))
    }

    /// Build a catalog from bare target names. Used by tests and by
    /// deployments that bring their own target list.
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        Self::from_planets(
            names
                .into_iter()
                .map(|kepler_name| Planet { kepler_name })
                .collect(),
        )
    }

    fn from_planets(planets: Vec<Planet>) -> Self {
        let names = planets.iter().map(|p| p.kepler_name.clone()).collect();
        Self { planets, names }
    }

    /// Whether a target name is in the catalog.
    pub fn exists(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// All planets, in dataset order.
    pub fn all(&self) -> &[Planet] {
        &self.planets
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

impl TargetLookup for PlanetsCatalog {
    fn exists(&self, name: &str) -> bool {
        PlanetsCatalog::exists(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
kepid,koi_disposition,koi_insol,koi_prad,kepler_name
10593626,CONFIRMED,1.05,1.45,Kepler-62 f
10593627,CONFIRMED,0.56,1.41,Kepler-442 b
10593628,CANDIDATE,1.05,1.45,
10593629,CONFIRMED,93.59,2.26,Kepler-100 c
10593630,FALSE POSITIVE,0.75,1.20,
10593631,CONFIRMED,,1.20,Kepler-000 x
";

    fn write_sample() -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("test_koi_{}.csv", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_keeps_only_habitable_confirmed_rows() {
        let path = write_sample();

        let catalog = PlanetsCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.exists("Kepler-62 f"));
        assert!(catalog.exists("Kepler-442 b"));
        assert!(!catalog.exists("Kepler-100 c"));
        assert!(!catalog.exists("Kepler-000 x"));

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_all_preserves_dataset_order() {
        let path = write_sample();

        let catalog = PlanetsCatalog::load(&path).unwrap();
        let names: Vec<&str> = catalog.all().iter().map(|p| p.kepler_name.as_str()).collect();
        assert_eq!(names, vec!["Kepler-62 f", "Kepler-442 b"]);

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_from_names_lookup() {
        let catalog = PlanetsCatalog::from_names(vec!["Kepler-62 f".to_string()]);
        assert!(catalog.exists("Kepler-62 f"));
        assert!(!catalog.exists("Mars"));
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = PlanetsCatalog::load("/nonexistent/koi.csv");
        assert!(result.is_err());
    }
}
