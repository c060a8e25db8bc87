//! Guest directory wire types
//!
//! Mirrors the directory service's JSON; kept decoupled from core models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category as sent by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestCategoryPayload {
    Adult,
    Child,
}

/// One guest record from `GET /events/{event_id}/guests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    pub category: GuestCategoryPayload,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub event_id: String,
    #[serde(default)]
    pub family_id: Option<String>,
    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
}

impl GuestPayload {
    /// Decode a response body
    pub fn list_from_bytes(bytes: &[u8]) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
