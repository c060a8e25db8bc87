//! View models for the guest list and room mapping views

mod guests;
mod rooms;

pub use guests::{GuestListViewModel, GuestRow};
pub use rooms::{PoolRow, RoomMappingViewModel, RoomRow};
