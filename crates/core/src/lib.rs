//! Gala Core Library
//!
//! Guest and room models, family grouping, the room-assignment engine and the
//! local selection store for the Gala event tools.

pub mod error;
pub mod invariants;
pub mod mapping;
pub mod models;
pub mod storage;

pub use error::{Error, Result};
pub use mapping::{AssignError, AutoAssignSummary, CapacityViolation, Location, RoomMapping};
pub use models::*;
pub use storage::{
    Database, PreferencesRepository, PreferencesStore, SelectionRepository, SelectionStore,
    Storage,
};
