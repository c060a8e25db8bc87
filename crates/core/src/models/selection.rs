//! Room purchase selection
//!
//! A selection records how many rooms of each catalog type were bought for an
//! event. The room-mapping view expands it into concrete room instances.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{fallback_rooms, Room, RoomType};

/// Purchased quantity per room-type id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomSelection {
    quantities: BTreeMap<String, u32>,
}

impl RoomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, room_type_id: &str, quantity: u32) -> Self {
        self.set(room_type_id, quantity);
        self
    }

    /// Set the quantity for a room type; zero removes it
    pub fn set(&mut self, room_type_id: &str, quantity: u32) {
        if quantity == 0 {
            self.quantities.remove(room_type_id);
        } else {
            self.quantities.insert(room_type_id.to_string(), quantity);
        }
    }

    pub fn quantity(&self, room_type_id: &str) -> u32 {
        self.quantities.get(room_type_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|&q| q == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.quantities.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Expand into room instances, in catalog order.
    ///
    /// Ids not present in the catalog are skipped.
    pub fn expand(&self, catalog: &[RoomType]) -> Vec<Room> {
        for (type_id, _) in self.iter() {
            if !catalog.iter().any(|t| t.id == type_id) {
                warn!(room_type = %type_id, "Selected room type is not in the catalog");
            }
        }

        catalog
            .iter()
            .flat_map(|room_type| {
                (1..=self.quantity(&room_type.id)).map(move |n| room_type.instantiate(n))
            })
            .collect()
    }
}

/// Rooms for the mapping view: the saved selection if it yields any rooms,
/// otherwise the fallback set
pub fn initial_rooms(selection: Option<&RoomSelection>, catalog: &[RoomType]) -> Vec<Room> {
    match selection.map(|s| s.expand(catalog)) {
        Some(rooms) if !rooms.is_empty() => rooms,
        _ => fallback_rooms(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_in_catalog_order() {
        let selection = RoomSelection::new()
            .with("harbor-single", 1)
            .with("grand-double", 2);

        let rooms = selection.expand(&RoomType::catalog());
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["grand-double-1", "grand-double-2", "harbor-single-1"]);
        assert_eq!(rooms[0].hotel_name, "Grand Plaza Hotel");
        assert_eq!(rooms[2].capacity, 1);
    }

    #[test]
    fn test_unknown_and_zero_quantities() {
        let mut selection = RoomSelection::new().with("penthouse", 3);
        selection.set("grand-suite", 0);
        assert!(selection.expand(&RoomType::catalog()).is_empty());
        assert_eq!(selection.quantity("grand-suite"), 0);
    }

    #[test]
    fn test_initial_rooms_falls_back() {
        let catalog = RoomType::catalog();
        assert_eq!(initial_rooms(None, &catalog), fallback_rooms());

        let empty = RoomSelection::new().with("penthouse", 1);
        assert_eq!(initial_rooms(Some(&empty), &catalog), fallback_rooms());

        let selection = RoomSelection::new().with("harbor-twin", 1);
        let rooms = initial_rooms(Some(&selection), &catalog);
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_type, "Twin Room");
    }

    #[test]
    fn test_selection_json_is_plain_object() {
        let selection = RoomSelection::new().with("grand-suite", 2);
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"grand-suite":2}"#);

        let parsed: RoomSelection = serde_json::from_str(r#"{"harbor-twin":3}"#).unwrap();
        assert_eq!(parsed.quantity("harbor-twin"), 3);
    }
}
