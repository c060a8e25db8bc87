//! Room and room-type models

use serde::{Deserialize, Serialize};

use super::Guest;

/// Identifier of a concrete room instance
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A bookable kind of room offered by a hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub hotel_name: String,
    pub name: String,
    pub capacity: u32,
}

impl RoomType {
    pub fn new(id: &str, hotel_name: &str, name: &str, capacity: u32) -> Self {
        Self {
            id: id.to_string(),
            hotel_name: hotel_name.to_string(),
            name: name.to_string(),
            capacity,
        }
    }

    /// Built-in catalog of purchasable room types, in display order
    pub fn catalog() -> Vec<RoomType> {
        vec![
            RoomType::new("grand-double", "Grand Plaza Hotel", "Double Room", 2),
            RoomType::new("grand-suite", "Grand Plaza Hotel", "Family Suite", 4),
            RoomType::new("harbor-single", "Harbor Inn", "Single Room", 1),
            RoomType::new("harbor-twin", "Harbor Inn", "Twin Room", 2),
        ]
    }

    /// Create the `n`th (1-based) room instance of this type
    pub fn instantiate(&self, n: u32) -> Room {
        Room::new(
            format!("{}-{}", self.id, n),
            self.hotel_name.clone(),
            self.name.clone(),
            self.capacity,
        )
    }
}

/// A concrete room with the guests currently placed in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub hotel_name: String,
    pub room_type: String,
    pub capacity: u32,
    pub assigned: Vec<Guest>,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        hotel_name: impl Into<String>,
        room_type: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: RoomId::new(id),
            hotel_name: hotel_name.into(),
            room_type: room_type.into(),
            capacity,
            assigned: Vec::new(),
        }
    }

    /// Total occupancy of the assigned guests
    pub fn occupancy(&self) -> u32 {
        self.assigned.iter().map(|g| g.occupancy).sum()
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.occupancy())
    }

    /// Would `guest` fit on top of the current occupancy?
    pub fn fits(&self, guest: &Guest) -> bool {
        guest.occupancy <= self.remaining_capacity()
    }

    pub fn contains(&self, guest_id: &super::GuestId) -> bool {
        self.assigned.iter().any(|g| &g.id == guest_id)
    }
}

/// Rooms offered when no purchase selection has been saved
pub fn fallback_rooms() -> Vec<Room> {
    let catalog = RoomType::catalog();
    let mut rooms = Vec::new();
    for (type_id, count) in [("grand-double", 2), ("grand-suite", 1), ("harbor-single", 1)] {
        if let Some(room_type) = catalog.iter().find(|t| t.id == type_id) {
            rooms.extend((1..=count).map(|n| room_type.instantiate(n)));
        }
    }
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_and_fit() {
        let mut room = Room::new("r1", "Harbor Inn", "Twin Room", 2);
        assert_eq!(room.occupancy(), 0);
        room.assigned.push(Guest::new("a", "A", 1));
        assert_eq!(room.occupancy(), 1);
        assert_eq!(room.remaining_capacity(), 1);
        assert!(room.fits(&Guest::new("b", "B", 1)));
        assert!(!room.fits(&Guest::new("c", "C", 2)));
    }

    #[test]
    fn test_fit_with_huge_occupancy() {
        let mut room = Room::new("r1", "Harbor Inn", "Twin Room", 2);
        room.assigned.push(Guest::new("a", "A", 1));
        assert!(!room.fits(&Guest::new("big", "Big", u32::MAX)));
        assert!(!room.fits(&Guest::new("big", "Big", u32::MAX - 1)));
    }

    #[test]
    fn test_instantiate_ids() {
        let room_type = RoomType::new("grand-suite", "Grand Plaza Hotel", "Family Suite", 4);
        let room = room_type.instantiate(3);
        assert_eq!(room.id.as_str(), "grand-suite-3");
        assert_eq!(room.capacity, 4);
        assert!(room.assigned.is_empty());
    }

    #[test]
    fn test_fallback_rooms() {
        let rooms = fallback_rooms();
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["grand-double-1", "grand-double-2", "grand-suite-1", "harbor-single-1"]
        );
    }
}
