//! Storage repository traits
//!
//! These traits define the storage interface, allowing for different
//! implementations (SQLite, mock, future remote backend).

use crate::error::Result;
use crate::models::RoomSelection;

/// Room selection repository operations
pub trait SelectionRepository {
    /// Save the purchased-room selection for an event
    fn save_selection(&self, event_id: &str, selection: &RoomSelection) -> Result<()>;

    /// Load the selection for an event, if one was saved
    fn load_selection(&self, event_id: &str) -> Result<Option<RoomSelection>>;

    /// Delete the selection for an event
    fn clear_selection(&self, event_id: &str) -> Result<()>;
}

/// App preference operations
pub trait PreferencesRepository {
    fn set_last_event(&self, event_id: &str) -> Result<()>;

    fn last_event(&self) -> Result<Option<String>>;
}

/// Combined storage interface
pub trait Storage: SelectionRepository + PreferencesRepository {}

impl<T> Storage for T where T: SelectionRepository + PreferencesRepository {}
