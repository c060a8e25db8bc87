//! Application state management

use gala_core::{
    initial_rooms, Database, PreferencesRepository, Room, RoomSelection, RoomType,
    SelectionRepository,
};

use crate::config::Config;
use crate::error::{AppError, Result};

/// Main application state
pub struct AppState {
    pub db: Database,
    pub config: Config,
    pub catalog: Vec<RoomType>,
}

impl AppState {
    pub fn open(config: Config) -> Result<Self> {
        let db_path = config.data_dir()?.join("gala.db");

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&db_path)?;
        Ok(Self::with_database(db, config))
    }

    pub fn with_database(db: Database, config: Config) -> Self {
        Self {
            db,
            config,
            catalog: RoomType::catalog(),
        }
    }

    /// Pick the event to work on: command line, then config, then the last
    /// event used. The choice is remembered.
    pub fn resolve_event(&self, from_cli: Option<String>) -> Result<String> {
        let event_id = match from_cli.or_else(|| self.config.event_id.clone()) {
            Some(id) => id,
            None => self.db.last_event()?.ok_or(AppError::MissingEventId)?,
        };

        self.db.set_last_event(&event_id)?;
        Ok(event_id)
    }

    pub fn selection(&self, event_id: &str) -> Result<Option<RoomSelection>> {
        Ok(self.db.load_selection(event_id)?)
    }

    /// Validate and store a purchase selection
    pub fn save_selection(&self, event_id: &str, selection: &RoomSelection) -> Result<()> {
        if let Some((unknown, _)) = selection
            .iter()
            .find(|(id, _)| !self.catalog.iter().any(|t| t.id == *id))
        {
            return Err(AppError::InvalidArgument(format!(
                "unknown room type '{}'",
                unknown
            )));
        }

        self.db.save_selection(event_id, selection)?;
        tracing::info!(event_id, "Room selection saved");
        Ok(())
    }

    pub fn clear_selection(&self, event_id: &str) -> Result<()> {
        Ok(self.db.clear_selection(event_id)?)
    }

    /// Rooms for the mapping view of an event
    pub fn rooms_for(&self, event_id: &str) -> Result<Vec<Room>> {
        let selection = self.selection(event_id)?;
        if selection.is_none() {
            tracing::debug!(event_id, "No saved selection, using fallback rooms");
        }
        Ok(initial_rooms(selection.as_ref(), &self.catalog))
    }
}
