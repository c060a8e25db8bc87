//! Room-assignment engine
//!
//! Owns the unassigned pool and the rooms of one mapping session. Every
//! mutation keeps two invariants: no room holds more occupancy than its
//! capacity, and every guest lives in exactly one place.

use thiserror::Error;
use tracing::debug;

use crate::invariants::assert_mapping_invariants;
use crate::models::{Guest, GuestId, Room, RoomId};

/// A guest could not be placed because the room is too full
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{guest_name} cannot be placed in {room_type}: capacity is {capacity}")]
pub struct CapacityViolation {
    pub guest_name: String,
    pub room_type: String,
    pub capacity: u32,
}

/// Why an assignment was refused. State is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error(transparent)]
    Capacity(#[from] CapacityViolation),

    #[error("Unknown guest: {0}")]
    UnknownGuest(GuestId),

    #[error("Unknown room: {0}")]
    UnknownRoom(RoomId),
}

/// Where a guest currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Unassigned,
    Room(RoomId),
}

/// Outcome of one auto-assign pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoAssignSummary {
    pub placed: usize,
    pub remaining: usize,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Pool(usize),
    Room(usize, usize),
}

/// Mutable state of the room-mapping view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomMapping {
    unassigned: Vec<Guest>,
    rooms: Vec<Room>,
    /// Guest picked up by a drag that has not been dropped yet
    pending_move: Option<GuestId>,
}

impl RoomMapping {
    /// Start a session. Rooms may already hold guests.
    pub fn new(rooms: Vec<Room>, unassigned: Vec<Guest>) -> Self {
        let mapping = Self {
            unassigned,
            rooms,
            pending_move: None,
        };
        assert_mapping_invariants(&mapping);
        mapping
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn unassigned(&self) -> &[Guest] {
        &self.unassigned
    }

    pub fn room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == room_id)
    }

    pub fn locate(&self, guest_id: &GuestId) -> Option<Location> {
        self.slot_of(guest_id).map(|slot| match slot {
            Slot::Pool(_) => Location::Unassigned,
            Slot::Room(r, _) => Location::Room(self.rooms[r].id.clone()),
        })
    }

    /// Total number of guest-units, placed or not
    pub fn guest_count(&self) -> usize {
        self.unassigned.len() + self.assigned_count()
    }

    pub fn assigned_count(&self) -> usize {
        self.rooms.iter().map(|r| r.assigned.len()).sum()
    }

    pub fn pending_move(&self) -> Option<&GuestId> {
        self.pending_move.as_ref()
    }

    /// Mark a guest as being moved (drag started)
    pub fn begin_move(&mut self, guest_id: &GuestId) -> Result<(), AssignError> {
        if self.slot_of(guest_id).is_none() {
            return Err(AssignError::UnknownGuest(guest_id.clone()));
        }
        self.pending_move = Some(guest_id.clone());
        Ok(())
    }

    pub fn cancel_move(&mut self) {
        self.pending_move = None;
    }

    /// Move a guest into a room, from the pool or from another room.
    ///
    /// Fails with a [`CapacityViolation`] if the room's current occupancy plus
    /// the guest's would exceed its capacity.
    pub fn assign(&mut self, guest_id: &GuestId, room_id: &RoomId) -> Result<(), AssignError> {
        let slot = self
            .slot_of(guest_id)
            .ok_or_else(|| AssignError::UnknownGuest(guest_id.clone()))?;
        let target = self
            .rooms
            .iter()
            .position(|r| &r.id == room_id)
            .ok_or_else(|| AssignError::UnknownRoom(room_id.clone()))?;

        // Dropping a guest onto the room it already occupies
        if matches!(slot, Slot::Room(r, _) if r == target) {
            self.pending_move = None;
            return Ok(());
        }

        let guest = self.guest_at(slot);
        let room = &self.rooms[target];
        if !room.fits(guest) {
            debug!(
                guest = %guest.id,
                room = %room.id,
                occupancy = room.occupancy(),
                capacity = room.capacity,
                "Assignment rejected"
            );
            return Err(CapacityViolation {
                guest_name: guest.name.clone(),
                room_type: room.room_type.clone(),
                capacity: room.capacity,
            }
            .into());
        }

        let guest = self.take(slot);
        debug!(guest = %guest.id, room = %room_id, "Guest assigned");
        self.rooms[target].assigned.push(guest);
        self.pending_move = None;

        assert_mapping_invariants(self);
        Ok(())
    }

    /// Return a guest to the unassigned pool. No-op if already there.
    pub fn unassign(&mut self, guest_id: &GuestId) -> Result<(), AssignError> {
        let slot = self
            .slot_of(guest_id)
            .ok_or_else(|| AssignError::UnknownGuest(guest_id.clone()))?;

        if let Slot::Room(..) = slot {
            let guest = self.take(slot);
            debug!(guest = %guest.id, "Guest unassigned");
            self.unassigned.push(guest);
        }
        self.pending_move = None;

        assert_mapping_invariants(self);
        Ok(())
    }

    /// Greedy first-fit pass: visit each room once, in order, and fill it
    /// with every remaining guest (in pool order) that still fits.
    ///
    /// Rooms already passed are never revisited, so guests can be left over
    /// even when another order would have placed them.
    pub fn auto_assign(&mut self) -> AutoAssignSummary {
        let mut remaining = std::mem::take(&mut self.unassigned);
        let mut placed = 0;

        for room in &mut self.rooms {
            let mut space = room.remaining_capacity();
            let mut carried = Vec::with_capacity(remaining.len());

            for guest in remaining {
                if guest.occupancy <= space {
                    space -= guest.occupancy;
                    room.assigned.push(guest);
                    placed += 1;
                } else {
                    carried.push(guest);
                }
            }

            remaining = carried;
        }

        self.unassigned = remaining;
        self.pending_move = None;

        let summary = AutoAssignSummary {
            placed,
            remaining: self.unassigned.len(),
        };
        debug!(placed = summary.placed, remaining = summary.remaining, "Auto-assign finished");

        assert_mapping_invariants(self);
        summary
    }

    /// Empty every room back into the pool
    pub fn reset(&mut self) {
        let mut pool = std::mem::take(&mut self.unassigned);
        for room in &mut self.rooms {
            pool.append(&mut room.assigned);
        }
        self.unassigned = pool;
        self.pending_move = None;

        assert_mapping_invariants(self);
    }

    fn slot_of(&self, guest_id: &GuestId) -> Option<Slot> {
        if let Some(i) = self.unassigned.iter().position(|g| &g.id == guest_id) {
            return Some(Slot::Pool(i));
        }
        self.rooms.iter().enumerate().find_map(|(r, room)| {
            room.assigned
                .iter()
                .position(|g| &g.id == guest_id)
                .map(|i| Slot::Room(r, i))
        })
    }

    fn guest_at(&self, slot: Slot) -> &Guest {
        match slot {
            Slot::Pool(i) => &self.unassigned[i],
            Slot::Room(r, i) => &self.rooms[r].assigned[i],
        }
    }

    fn take(&mut self, slot: Slot) -> Guest {
        match slot {
            Slot::Pool(i) => self.unassigned.remove(i),
            Slot::Room(r, i) => self.rooms[r].assigned.remove(i),
        }
    }
}
