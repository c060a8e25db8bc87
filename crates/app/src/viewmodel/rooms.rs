//! Room mapping view model
//!
//! Translates drag and drop gestures 1:1 into engine calls and keeps the
//! dismissible notice shown after a refused drop.

use gala_core::{AssignError, AutoAssignSummary, GuestId, RoomId, RoomMapping};

/// A room as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRow {
    pub id: String,
    pub label: String,
    pub occupancy: u32,
    pub capacity: u32,
    pub guests: Vec<PoolRow>,
}

/// A guest-unit as displayed, in a room or in the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRow {
    pub id: String,
    pub name: String,
    pub occupancy: u32,
    pub is_moving: bool,
}

pub struct RoomMappingViewModel {
    mapping: RoomMapping,
    notice: Option<String>,
}

impl RoomMappingViewModel {
    pub fn new(mapping: RoomMapping) -> Self {
        Self {
            mapping,
            notice: None,
        }
    }

    pub fn mapping(&self) -> &RoomMapping {
        &self.mapping
    }

    /// Message from the last refused drop, until dismissed
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// A guest was picked up
    pub fn drag_start(&mut self, guest_id: &GuestId) -> bool {
        let result = self.mapping.begin_move(guest_id);
        self.report(result)
    }

    pub fn drag_cancel(&mut self) {
        self.mapping.cancel_move();
    }

    /// The dragged guest was dropped on a room
    pub fn drop_on_room(&mut self, room_id: &RoomId) -> bool {
        let Some(guest_id) = self.mapping.pending_move().cloned() else {
            return false;
        };
        let result = self.mapping.assign(&guest_id, room_id);
        self.report(result)
    }

    /// The dragged guest was dropped back on the unassigned pool
    pub fn drop_on_pool(&mut self) -> bool {
        let Some(guest_id) = self.mapping.pending_move().cloned() else {
            return false;
        };
        let result = self.mapping.unassign(&guest_id);
        self.report(result)
    }

    /// Pick up and drop in one step
    pub fn move_to_room(&mut self, guest_id: &GuestId, room_id: &RoomId) -> bool {
        self.drag_start(guest_id) && self.drop_on_room(room_id)
    }

    pub fn move_to_pool(&mut self, guest_id: &GuestId) -> bool {
        self.drag_start(guest_id) && self.drop_on_pool()
    }

    pub fn auto_assign(&mut self) -> AutoAssignSummary {
        self.notice = None;
        let summary = self.mapping.auto_assign();
        tracing::info!(
            placed = summary.placed,
            remaining = summary.remaining,
            "Auto-assigned guests"
        );
        summary
    }

    pub fn reset(&mut self) {
        self.notice = None;
        self.mapping.reset();
    }

    fn report(&mut self, result: Result<(), AssignError>) -> bool {
        match result {
            Ok(()) => {
                self.notice = None;
                true
            }
            Err(AssignError::Capacity(violation)) => {
                self.notice = Some(violation.to_string());
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring gesture on stale id");
                self.notice = Some(e.to_string());
                false
            }
        }
    }

    pub fn room_rows(&self) -> Vec<RoomRow> {
        self.mapping
            .rooms()
            .iter()
            .map(|room| RoomRow {
                id: room.id.to_string(),
                label: format!("{} - {}", room.hotel_name, room.room_type),
                occupancy: room.occupancy(),
                capacity: room.capacity,
                guests: room.assigned.iter().map(|g| self.pool_row(g)).collect(),
            })
            .collect()
    }

    pub fn pool_rows(&self) -> Vec<PoolRow> {
        self.mapping
            .unassigned()
            .iter()
            .map(|g| self.pool_row(g))
            .collect()
    }

    fn pool_row(&self, guest: &gala_core::Guest) -> PoolRow {
        PoolRow {
            id: guest.id.to_string(),
            name: guest.name.clone(),
            occupancy: guest.occupancy,
            is_moving: self.mapping.pending_move() == Some(&guest.id),
        }
    }
}
