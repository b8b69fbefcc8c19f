//! Hostel hierarchy models
//!
//! Hostel, wing, floor and room form a strict containment hierarchy; rooms
//! carry the occupancy bookkeeping used during allocation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hostel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub hostel_type: String,
    pub admin_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Wing {
    pub id: i64,
    pub name: String,
    pub hostel_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Floor {
    pub id: i64,
    pub number: i32,
    pub wing_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub number: String,
    pub room_type: String,
    pub occupancy: String,
    pub capacity: i32,
    pub current_occupants: i32,
    pub floor_id: i64,
}

impl Room {
    /// Whether another occupant fits into this room
    pub fn has_capacity(&self) -> bool {
        self.current_occupants < self.capacity
    }
}

/// Room joined with its floor, wing and hostel, for listings and dashboards
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomDetails {
    pub id: i64,
    pub number: String,
    pub room_type: String,
    pub occupancy: String,
    pub current_occupants: i32,
    pub max_capacity: i32,
    pub floor_number: i32,
    pub wing_name: String,
    pub hostel_name: String,
}

/// Aggregate occupancy figures per room category
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomStatistics {
    pub room_type: String,
    pub occupancy: String,
    pub total_rooms: i64,
    pub occupied_beds: i64,
    pub total_capacity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_capacity_check() {
        let mut room = Room {
            id: 1,
            number: "101".to_string(),
            room_type: "Single".to_string(),
            occupancy: "Single".to_string(),
            capacity: 1,
            current_occupants: 0,
            floor_id: 1,
        };
        assert!(room.has_capacity());

        room.current_occupants = 1;
        assert!(!room.has_capacity());
    }
}
