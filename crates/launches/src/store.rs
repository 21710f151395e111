//! Launch Store - Durable Launch Persistence
//!
//! SQLite-backed storage for launch records with:
//! - WAL mode for durability
//! - Upsert semantics keyed by flight number
//! - Transactional flight-number assignment (read-max-then-increment and
//!   insert as one unit, against a primary-key-unique column)
//!
//! # Guarantees
//!
//! - No two persisted launches ever share a flight number
//! - Flight numbers are strictly increasing, starting at
//!   [`BASE_FLIGHT_NUMBER`] when the store is empty
//! - A launch row is either fully written or not written at all

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use launchdeck_domain::{Launch, ValidatedLaunch, BASE_FLIGHT_NUMBER};

/// Errors that can occur in launch-store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Launch store with SQLite backend
pub struct LaunchStore {
    conn: Connection,
}

impl LaunchStore {
    /// Create or open a store at the specified path.
    ///
    /// Parent directories are created as needed; WAL mode is enabled and the
    /// schema initialized on first open.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        info!(path = %path.display(), "Opening launch store");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::init_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Open an in-memory store, for tests and throwaway deployments.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS launches (
                flight_number INTEGER PRIMARY KEY,
                mission TEXT NOT NULL,
                rocket TEXT NOT NULL,
                target TEXT,
                launch_date_ms INTEGER NOT NULL,
                customers TEXT NOT NULL,
                upcoming INTEGER NOT NULL,
                success INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_launch_date ON launches(launch_date_ms);
            "#,
        )?;

        Ok(())
    }

    /// Insert-or-replace a launch keyed by its flight number. Idempotent.
    pub fn save(&self, launch: &Launch) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO launches (
                flight_number, mission, rocket, target,
                launch_date_ms, customers, upcoming, success
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                launch.flight_number,
                launch.mission,
                launch.rocket,
                launch.target,
                launch.launch_date.timestamp_millis(),
                serde_json::to_string(&launch.customers)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
                launch.upcoming,
                launch.success,
            ],
        )?;

        Ok(())
    }

    /// Assign the next flight number and persist a validated launch, inside
    /// one transaction.
    ///
    /// The max-read and the insert commit together, and flight_number is the
    /// primary key, so concurrent callers can never both persist the same
    /// number.
    ///
    /// # Returns
    /// * `Ok(Launch)` - The stored launch, including its assigned flight number
    /// * `Err(StoreError)` - If the database rejects the write
    pub fn insert_next(&mut self, validated: ValidatedLaunch) -> Result<Launch> {
        let tx = self.conn.transaction()?;

        let latest: u32 = tx.query_row(
            "SELECT COALESCE(MAX(flight_number), 0) FROM launches",
            [],
            |row| row.get(0),
        )?;

        let flight_number = if latest == 0 {
            BASE_FLIGHT_NUMBER
        } else {
            latest + 1
        };

        let launch = Launch {
            flight_number,
            mission: validated.mission,
            rocket: validated.rocket,
            target: Some(validated.target),
            launch_date: validated.launch_date,
            customers: validated.customers,
            upcoming: true,
            success: true,
        };

        tx.execute(
            r#"
            INSERT INTO launches (
                flight_number, mission, rocket, target,
                launch_date_ms, customers, upcoming, success
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                launch.flight_number,
                launch.mission,
                launch.rocket,
                launch.target,
                launch.launch_date.timestamp_millis(),
                serde_json::to_string(&launch.customers)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
                launch.upcoming,
                launch.success,
            ],
        )?;

        tx.commit()?;

        debug!(
            flight_number = launch.flight_number,
            mission = %launch.mission,
            "Launch persisted"
        );

        Ok(launch)
    }

    /// Look up a launch by flight number.
    pub fn find_by_flight_number(&self, flight_number: u32) -> Result<Option<Launch>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT flight_number, mission, rocket, target,
                   launch_date_ms, customers, upcoming, success
            FROM launches
            WHERE flight_number = ?1
            "#,
        )?;

        let launch = stmt
            .query_row([flight_number], row_to_launch)
            .optional()?;

        Ok(launch)
    }

    /// Highest flight number currently stored, 0 when the store is empty.
    pub fn latest_flight_number(&self) -> Result<u32> {
        let latest = self.conn.query_row(
            "SELECT COALESCE(MAX(flight_number), 0) FROM launches",
            [],
            |row| row.get(0),
        )?;

        Ok(latest)
    }

    /// All stored launches, ordered by flight number.
    pub fn all(&self) -> Result<Vec<Launch>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT flight_number, mission, rocket, target,
                   launch_date_ms, customers, upcoming, success
            FROM launches
            ORDER BY flight_number ASC
            "#,
        )?;

        let launches = stmt
            .query_map([], row_to_launch)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(launches)
    }

    /// Mark a launch aborted: no longer upcoming, not successful.
    ///
    /// Returns the updated launch, or `None` when no launch has that flight
    /// number. Launches are never deleted.
    pub fn mark_aborted(&self, flight_number: u32) -> Result<Option<Launch>> {
        let updated = self.conn.execute(
            "UPDATE launches SET upcoming = 0, success = 0 WHERE flight_number = ?1",
            [flight_number],
        )?;

        if updated == 0 {
            return Ok(None);
        }

        self.find_by_flight_number(flight_number)
    }
}

fn row_to_launch(row: &Row<'_>) -> rusqlite::Result<Launch> {
    let launch_date_ms: i64 = row.get(4)?;
    let launch_date = chrono::DateTime::from_timestamp_millis(launch_date_ms).ok_or_else(|| {
        rusqlite::Error::IntegralValueOutOfRange(4, launch_date_ms)
    })?;

    let customers_json: String = row.get(5)?;
    let customers = serde_json::from_str(&customers_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Launch {
        flight_number: row.get(0)?,
        mission: row.get(1)?,
        rocket: row.get(2)?,
        target: row.get(3)?,
        launch_date,
        customers,
        upcoming: row.get(6)?,
        success: row.get(7)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn validated(mission: &str) -> ValidatedLaunch {
        ValidatedLaunch {
            mission: mission.to_string(),
            rocket: "ZTM Experimental IS1".to_string(),
            target: "Kepler-62 f".to_string(),
            launch_date: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            customers: vec!["Zero to Mastery".to_string(), "NASA".to_string()],
        }
    }

    #[test]
    fn test_store_creation_on_disk() {
        let db_path = std::env::temp_dir().join(format!("test_launches_{}.db", uuid::Uuid::new_v4()));

        let store = LaunchStore::open(&db_path).unwrap();
        assert_eq!(store.latest_flight_number().unwrap(), 0);
        assert!(store.all().unwrap().is_empty());

        // Cleanup
        std::fs::remove_file(db_path).ok();
    }

    #[test]
    fn test_first_launch_gets_base_flight_number() {
        let mut store = LaunchStore::open_in_memory().unwrap();

        let launch = store.insert_next(validated("ZTM155")).unwrap();
        assert_eq!(launch.flight_number, BASE_FLIGHT_NUMBER);
        assert!(launch.upcoming);
        assert!(launch.success);
    }

    #[test]
    fn test_flight_numbers_are_consecutive() {
        let mut store = LaunchStore::open_in_memory().unwrap();

        let numbers: Vec<u32> = (0..5)
            .map(|i| {
                store
                    .insert_next(validated(&format!("ZTM{}", i)))
                    .unwrap()
                    .flight_number
            })
            .collect();

        assert_eq!(numbers, vec![100, 101, 102, 103, 104]);
        assert_eq!(store.latest_flight_number().unwrap(), 104);
    }

    #[test]
    fn test_find_by_flight_number() {
        let mut store = LaunchStore::open_in_memory().unwrap();
        let stored = store.insert_next(validated("ZTM155")).unwrap();

        let found = store.find_by_flight_number(stored.flight_number).unwrap();
        assert_eq!(found, Some(stored));

        assert!(store.find_by_flight_number(9999).unwrap().is_none());
    }

    #[test]
    fn test_save_is_an_upsert() {
        let store = LaunchStore::open_in_memory().unwrap();

        let mut launch = Launch {
            flight_number: 1,
            mission: "FalconSat".to_string(),
            rocket: "Falcon 1".to_string(),
            target: None,
            launch_date: Utc.with_ymd_and_hms(2006, 3, 24, 22, 30, 0).unwrap(),
            customers: vec!["DARPA".to_string()],
            upcoming: false,
            success: false,
        };

        store.save(&launch).unwrap();
        launch.mission = "FalconSat (reflown)".to_string();
        store.save(&launch).unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].mission, "FalconSat (reflown)");
        assert!(all[0].target.is_none());
    }

    #[test]
    fn test_all_orders_by_flight_number() {
        let mut store = LaunchStore::open_in_memory().unwrap();
        store.insert_next(validated("first")).unwrap();
        store.insert_next(validated("second")).unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].flight_number < all[1].flight_number);
        assert_eq!(all[0].mission, "first");
    }

    #[test]
    fn test_launch_round_trips_through_storage() {
        let mut store = LaunchStore::open_in_memory().unwrap();
        let stored = store.insert_next(validated("ZTM155")).unwrap();

        let reloaded = store
            .find_by_flight_number(stored.flight_number)
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.launch_date, stored.launch_date);
        assert_eq!(reloaded.customers, stored.customers);
    }

    #[test]
    fn test_mark_aborted() {
        let mut store = LaunchStore::open_in_memory().unwrap();
        let stored = store.insert_next(validated("ZTM155")).unwrap();

        let aborted = store.mark_aborted(stored.flight_number).unwrap().unwrap();
        assert!(!aborted.upcoming);
        assert!(!aborted.success);

        assert!(store.mark_aborted(9999).unwrap().is_none());
    }

    #[test]
    fn test_reopen_preserves_launches() {
        let db_path = std::env::temp_dir().join(format!("test_launches_{}.db", uuid::Uuid::new_v4()));

        {
            let mut store = LaunchStore::open(&db_path).unwrap();
            store.insert_next(validated("ZTM155")).unwrap();
        }

        let store = LaunchStore::open(&db_path).unwrap();
        assert_eq!(store.latest_flight_number().unwrap(), BASE_FLIGHT_NUMBER);

        // Cleanup
        std::fs::remove_file(db_path).ok();
    }
}
