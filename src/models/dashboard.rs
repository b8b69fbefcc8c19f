//! Dashboard statistics model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The eight admin dashboard counters
///
/// Every counter defaults to 0 when the underlying value is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct DashboardStats {
    pub total_students: i64,
    pub total_rooms: i64,
    pub pending_applications: i64,
    pub pending_complaints: i64,
    pub inprogress_complaints: i64,
    pub resolved_complaints: i64,
    pub approved_applications: i64,
    pub students_with_rooms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default_to_zero() {
        let stats = DashboardStats::default();
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.total_rooms, 0);
        assert_eq!(stats.pending_applications, 0);
        assert_eq!(stats.pending_complaints, 0);
        assert_eq!(stats.inprogress_complaints, 0);
        assert_eq!(stats.resolved_complaints, 0);
        assert_eq!(stats.approved_applications, 0);
        assert_eq!(stats.students_with_rooms, 0);
    }
}
