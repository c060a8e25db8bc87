//! Room selection persistence
//!
//! Keeps the purchased-room selection per event so the mapping view can
//! rebuild its rooms on the next start.

use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::instrument;

use crate::error::Result;
use crate::models::RoomSelection;

use super::parse::OptionalExt;

/// Room selection store
pub struct SelectionStore<'a> {
    conn: &'a Connection,
}

impl<'a> SelectionStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Save (or replace) the selection for an event
    #[instrument(skip(self, selection))]
    pub fn save(&self, event_id: &str, selection: &RoomSelection) -> Result<()> {
        let selection_json = serde_json::to_string(selection)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO room_selections (event_id, selection_json, updated_at)
             VALUES (?1, ?2, ?3)",
            params![event_id, selection_json, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    /// Load the selection for an event
    pub fn load(&self, event_id: &str) -> Result<Option<RoomSelection>> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT selection_json FROM room_selections WHERE event_id = ?1",
                params![event_id],
                |row| row.get(0),
            )
            .optional()?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Forget the selection for an event
    pub fn clear(&self, event_id: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM room_selections WHERE event_id = ?1",
            params![event_id],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_selection_save_load() {
        let db = Database::open_in_memory().unwrap();
        let store = SelectionStore::new(&db.conn);

        let selection = RoomSelection::new()
            .with("grand-double", 2)
            .with("harbor-single", 1);
        store.save("evt-1", &selection).unwrap();

        let loaded = store.load("evt-1").unwrap().unwrap();
        assert_eq!(loaded, selection);
    }

    #[test]
    fn test_selection_replace_and_clear() {
        let db = Database::open_in_memory().unwrap();
        let store = SelectionStore::new(&db.conn);

        store
            .save("evt-1", &RoomSelection::new().with("grand-suite", 1))
            .unwrap();
        store
            .save("evt-1", &RoomSelection::new().with("grand-suite", 3))
            .unwrap();
        assert_eq!(store.load("evt-1").unwrap().unwrap().quantity("grand-suite"), 3);

        store.clear("evt-1").unwrap();
        assert!(store.load("evt-1").unwrap().is_none());
    }

    #[test]
    fn test_selection_not_found() {
        let db = Database::open_in_memory().unwrap();
        let store = SelectionStore::new(&db.conn);
        assert!(store.load("missing").unwrap().is_none());
    }
}
