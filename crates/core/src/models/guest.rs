//! Guest model - the unit placed into rooms

use serde::{Deserialize, Serialize};

/// Identifier of a guest-unit
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(pub String);

impl GuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GuestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A guest-unit: one or more people that always share a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    /// Number of people this unit consumes from a room's capacity
    pub occupancy: u32,
}

impl Guest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, occupancy: u32) -> Self {
        Self {
            id: GuestId::new(id),
            name: name.into(),
            occupancy,
        }
    }
}

/// The fixed guest list used when no directory data is available
pub fn demo_guests() -> Vec<Guest> {
    vec![
        Guest::new("g1", "Amelia Hart", 2),
        Guest::new("g2", "Noah Brennan", 1),
        Guest::new("g3", "The Okafor family", 4),
        Guest::new("g4", "Lena Vogel", 1),
        Guest::new("g5", "Mateo Ruiz", 2),
        Guest::new("g6", "Priya Nair", 1),
        Guest::new("g7", "The Lindqvist family", 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_guests_unique_and_positive() {
        let guests = demo_guests();
        let mut ids: Vec<_> = guests.iter().map(|g| g.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), guests.len());
        assert!(guests.iter().all(|g| g.occupancy > 0));
    }

    #[test]
    fn test_guest_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&GuestId::new("g1")).unwrap();
        assert_eq!(json, "\"g1\"");
    }
}
