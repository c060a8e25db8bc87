//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::mapping::RoomMapping;
use crate::models::{Guest, Room};

/// Validate a whole mapping: every room within capacity, every guest once
pub fn assert_mapping_invariants(mapping: &RoomMapping) {
    if !cfg!(debug_assertions) {
        return;
    }

    for room in mapping.rooms() {
        assert_room_invariants(room);
    }

    let mut seen = HashSet::new();
    for guest in mapping
        .unassigned()
        .iter()
        .chain(mapping.rooms().iter().flat_map(|r| r.assigned.iter()))
    {
        assert_guest_invariants(guest);
        debug_assert!(
            seen.insert(&guest.id),
            "Guest {} appears in more than one place",
            guest.id
        );
    }
}

/// Validate that a room is not over capacity
pub fn assert_room_invariants(room: &Room) {
    debug_assert!(room.capacity > 0, "Room {} has zero capacity", room.id);

    // Capacity is a hard limit, never clamped
    debug_assert!(
        room.occupancy() <= room.capacity,
        "Room {} holds {} but capacity is {}",
        room.id,
        room.occupancy(),
        room.capacity
    );
}

/// Validate that a guest-unit occupies at least one place
pub fn assert_guest_invariants(guest: &Guest) {
    debug_assert!(
        guest.occupancy > 0,
        "Guest {} has zero occupancy",
        guest.id
    );
}
