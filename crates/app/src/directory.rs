//! Guest directory access
//!
//! Converts wire payloads from `gala-net` into core records.

use gala_core::{GuestCategory, GuestRecord};
use gala_net::{DirectoryClient, GuestCategoryPayload, GuestPayload};

use crate::config::Config;
use crate::error::Result;

/// Convert a wire payload to a directory record
pub fn to_record(payload: GuestPayload) -> GuestRecord {
    GuestRecord {
        id: payload.id,
        name: payload.name,
        age: payload.age,
        category: match payload.category {
            GuestCategoryPayload::Adult => GuestCategory::Adult,
            GuestCategoryPayload::Child => GuestCategory::Child,
        },
        phone: payload.phone,
        email: payload.email,
        event_id: payload.event_id,
        family_id: payload.family_id,
        arrival_date: payload.arrival_date,
        departure_date: payload.departure_date,
    }
}

/// Build a client from the config
pub fn client(config: &Config) -> Result<DirectoryClient> {
    Ok(DirectoryClient::new(
        config.api.base_url.clone(),
        config.token()?,
    )?)
}

/// Fetch and convert the guests of an event
pub async fn fetch_records(
    client: &DirectoryClient,
    event_id: &str,
) -> gala_net::Result<Vec<GuestRecord>> {
    let payloads = client.fetch_guests(event_id).await?;
    Ok(payloads.into_iter().map(to_record).collect())
}
