//! Gala Network Library
//!
//! HTTP client for the event guest directory.
//!
//! # Usage
//!
//! ```ignore
//! let client = DirectoryClient::new("https://api.example.com", token)?;
//! let guests = client.fetch_guests("evt-42").await?;
//! ```

pub mod client;
pub mod error;
pub mod protocol;

pub use client::DirectoryClient;
pub use error::{Error, Result};
pub use protocol::{GuestCategoryPayload, GuestPayload};

/// Request timeout for directory calls, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
