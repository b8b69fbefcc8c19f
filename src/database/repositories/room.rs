//! Room repository implementation
//!
//! Queries over the hostel → wing → floor → room hierarchy.

use sqlx::PgPool;
use tracing::{error, info};

use crate::models::room::{Room, RoomDetails, RoomStatistics};
use crate::utils::errors::HostelError;

#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Room>, HostelError> {
        let room = sqlx::query_as::<_, Room>(
            "SELECT id, number, room_type, occupancy, capacity, current_occupants, floor_id FROM rooms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(room_id = id, error = %e, "Error fetching room by id");
            e
        })?;

        Ok(room)
    }

    /// Retrieve rooms with spare capacity
    ///
    /// Both filters are optional; an absent filter means no restriction.
    pub async fn fetch_available(
        &self,
        room_type: Option<&str>,
        occupancy: Option<&str>,
    ) -> Result<Vec<RoomDetails>, HostelError> {
        let rooms = sqlx::query_as::<_, RoomDetails>(
            r#"
            SELECT r.id, r.number, r.room_type, r.occupancy,
                   r.current_occupants, r.capacity AS max_capacity,
                   f.number AS floor_number, w.name AS wing_name, h.name AS hostel_name
            FROM rooms r
            JOIN floors f ON f.id = r.floor_id
            JOIN wings w ON w.id = f.wing_id
            JOIN hostels h ON h.id = w.hostel_id
            WHERE r.current_occupants < r.capacity
              AND ($1::TEXT IS NULL OR r.room_type = $1)
              AND ($2::TEXT IS NULL OR r.occupancy = $2)
            ORDER BY h.name, w.name, f.number, r.number
            "#,
        )
        .bind(room_type)
        .bind(occupancy)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching available rooms");
            e
        })?;

        info!("Fetched {} available rooms", rooms.len());
        Ok(rooms)
    }

    /// Retrieve occupancy statistics grouped by room category
    pub async fn fetch_statistics(&self) -> Result<Vec<RoomStatistics>, HostelError> {
        let statistics = sqlx::query_as::<_, RoomStatistics>(
            r#"
            SELECT room_type, occupancy,
                   COUNT(*) AS total_rooms,
                   COALESCE(SUM(current_occupants), 0) AS occupied_beds,
                   COALESCE(SUM(capacity), 0) AS total_capacity
            FROM rooms
            GROUP BY room_type, occupancy
            ORDER BY room_type, occupancy
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching room statistics");
            e
        })?;

        info!(
            "Fetched room statistics for {} categories",
            statistics.len()
        );
        Ok(statistics)
    }

    /// Find the room allocated to a student through an approved application
    pub async fn find_allocated_for_student(
        &self,
        student_id: i64,
    ) -> Result<Option<RoomDetails>, HostelError> {
        let room = sqlx::query_as::<_, RoomDetails>(
            r#"
            SELECT r.id, r.number, r.room_type, r.occupancy,
                   r.current_occupants, r.capacity AS max_capacity,
                   f.number AS floor_number, w.name AS wing_name, h.name AS hostel_name
            FROM applications a
            JOIN rooms r ON r.id = a.room_id
            JOIN floors f ON f.id = r.floor_id
            JOIN wings w ON w.id = f.wing_id
            JOIN hostels h ON h.id = w.hostel_id
            WHERE a.student_id = $1 AND a.status = 'approved'
            "#,
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(student_id = student_id, error = %e, "Error fetching allocated room");
            e
        })?;

        Ok(room)
    }
}
