//! SQLite storage layer for Gala

mod migrations;
mod parse;
mod preferences;
mod selections;
mod traits;

use std::path::Path;

use rusqlite::Connection;
use tracing::instrument;

use crate::error::Result;
use crate::models::RoomSelection;

pub use preferences::PreferencesStore;
pub use selections::SelectionStore;
pub use traits::{PreferencesRepository, SelectionRepository, Storage};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap_or(0)
    }

    /// Get room selection store
    pub fn selections(&self) -> SelectionStore<'_> {
        SelectionStore::new(&self.conn)
    }

    /// Get preferences store
    pub fn preferences(&self) -> PreferencesStore<'_> {
        PreferencesStore::new(&self.conn)
    }
}

impl SelectionRepository for Database {
    fn save_selection(&self, event_id: &str, selection: &RoomSelection) -> Result<()> {
        self.selections().save(event_id, selection)
    }

    fn load_selection(&self, event_id: &str) -> Result<Option<RoomSelection>> {
        self.selections().load(event_id)
    }

    fn clear_selection(&self, event_id: &str) -> Result<()> {
        self.selections().clear(event_id)
    }
}

impl PreferencesRepository for Database {
    fn set_last_event(&self, event_id: &str) -> Result<()> {
        self.preferences().set_last_event(event_id)
    }

    fn last_event(&self) -> Result<Option<String>> {
        self.preferences().get_last_event()
    }
}
