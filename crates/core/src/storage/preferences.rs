//! App preferences persistence
//!
//! Stores small settings such as the last opened event.

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::error::Result;

use super::parse::OptionalExt;

const LAST_EVENT_KEY: &str = "last_event_id";

/// Preferences store
pub struct PreferencesStore<'a> {
    conn: &'a Connection,
}

impl<'a> PreferencesStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO app_preferences (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM app_preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }

    /// Remember the event the user last worked on
    pub fn set_last_event(&self, event_id: &str) -> Result<()> {
        self.set(LAST_EVENT_KEY, event_id)
    }

    pub fn get_last_event(&self) -> Result<Option<String>> {
        self.get(LAST_EVENT_KEY)
    }
}
