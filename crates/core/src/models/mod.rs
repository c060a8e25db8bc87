//! Data models for Gala

mod directory;
mod guest;
mod room;
mod selection;

pub use directory::*;
pub use guest::*;
pub use room::*;
pub use selection::*;
