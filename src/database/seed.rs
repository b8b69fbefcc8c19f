//! Sample data seeder
//!
//! Populates a test environment with fixed-credential demo accounts and a
//! fixed hostel taxonomy. Every step is get-or-create by natural key, so
//! re-running the seed leaves the record counts unchanged.

use sqlx::PgPool;
use tracing::info;

use crate::models::complaint::ComplaintStatus;
use crate::utils::errors::HostelError;
use crate::utils::password::hash_password;

/// Demo student accounts: username, name, semester, email
const STUDENTS: [(&str, &str, i32, &str); 3] = [
    ("john", "John Doe", 3, "john@student.com"),
    ("alice", "Alice Smith", 5, "alice@student.com"),
    ("bob", "Bob Johnson", 2, "bob@student.com"),
];

/// Demo hostels: name, address, type
const HOSTELS: [(&str, &str, &str); 2] = [
    ("North Hostel", "North Campus Area", "Boys"),
    ("South Hostel", "South Campus Area", "Girls"),
];

/// Demo wings: name, hostel index
const WINGS: [(&str, usize); 3] = [("A Wing", 0), ("B Wing", 0), ("A Wing", 1)];

/// Demo floors: number, wing index
const FLOORS: [(i32, usize); 4] = [(1, 0), (2, 0), (1, 1), (1, 2)];

/// Demo rooms: number, room type, occupancy, floor index
const ROOMS: [(&str, &str, &str, usize); 8] = [
    ("101", "Single", "Single", 0),
    ("102", "Double", "Double", 0),
    ("103", "Triple", "Triple", 0),
    ("201", "Single", "Single", 1),
    ("202", "Double", "Double", 1),
    ("104", "Single", "Single", 2),
    ("105", "Double", "Double", 2),
    ("106", "Single", "Single", 3),
];

/// Demo complaints: student index, description, status
const COMPLAINTS: [(usize, &str, ComplaintStatus); 3] = [
    (0, "AC not working in my room", ComplaintStatus::Pending),
    (1, "Water supply issue", ComplaintStatus::InProgress),
    (2, "Light bulb needs replacement", ComplaintStatus::Resolved),
];

const ADMIN_PASSWORD: &str = "admin123";
const STUDENT_PASSWORD: &str = "student123";

/// Final record counts after seeding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: i64,
    pub students: i64,
    pub admins: i64,
    pub hostels: i64,
    pub wings: i64,
    pub floors: i64,
    pub rooms: i64,
    pub applications: i64,
    pub complaints: i64,
}

/// Seed the demo data set
pub async fn create_sample_data(pool: &PgPool) -> Result<SeedSummary, HostelError> {
    info!("Creating sample data...");

    // Admin account
    let admin_user_id = get_or_create_user(pool, "admin", ADMIN_PASSWORD, "admin").await?;
    let admin_id = get_or_create_admin(
        pool,
        admin_user_id,
        "ADM_ADMIN",
        "Admin User",
        "admin@hostelms.com",
    )
    .await?;

    // Student accounts
    let mut student_ids = Vec::with_capacity(STUDENTS.len());
    for (username, name, semester, email) in STUDENTS {
        let user_id = get_or_create_user(pool, username, STUDENT_PASSWORD, "student").await?;
        let student_id = get_or_create_student(
            pool,
            user_id,
            &format!("STU_{}", username.to_uppercase()),
            name,
            semester,
            email,
        )
        .await?;
        student_ids.push(student_id);
    }

    // Hostel hierarchy
    let mut hostel_ids = Vec::with_capacity(HOSTELS.len());
    for (name, address, hostel_type) in HOSTELS {
        hostel_ids.push(get_or_create_hostel(pool, name, address, hostel_type, admin_id).await?);
    }

    let mut wing_ids = Vec::with_capacity(WINGS.len());
    for (name, hostel_idx) in WINGS {
        wing_ids.push(get_or_create_wing(pool, name, hostel_ids[hostel_idx]).await?);
    }

    let mut floor_ids = Vec::with_capacity(FLOORS.len());
    for (number, wing_idx) in FLOORS {
        floor_ids.push(get_or_create_floor(pool, number, wing_ids[wing_idx]).await?);
    }

    let mut room_ids = Vec::with_capacity(ROOMS.len());
    for (number, room_type, occupancy, floor_idx) in ROOMS {
        room_ids.push(
            get_or_create_room(
                pool,
                number,
                room_type,
                occupancy,
                capacity_for(occupancy),
                floor_ids[floor_idx],
            )
            .await?,
        );
    }

    // Sample applications: john pending, alice approved with room 102
    seed_pending_application(pool, student_ids[0], "Single", "Single").await?;
    seed_approved_application(pool, student_ids[1], "Double", "Double", room_ids[1]).await?;

    // Sample complaints
    for (student_idx, description, status) in COMPLAINTS {
        seed_complaint(pool, student_ids[student_idx], description, status).await?;
    }

    let summary = summarize(pool).await?;
    info!(
        "Sample data ready: {} users, {} rooms, {} applications, {} complaints",
        summary.users, summary.rooms, summary.applications, summary.complaints
    );
    info!("Test credentials: admin/admin123, john/student123, alice/student123, bob/student123");
    Ok(summary)
}

/// Capacity implied by an occupancy category
fn capacity_for(occupancy: &str) -> i32 {
    match occupancy {
        "Single" => 1,
        "Double" => 2,
        "Triple" => 3,
        _ => 1,
    }
}

async fn get_or_create_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    role: &str,
) -> Result<i64, HostelError> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    if let Some((id,)) = existing {
        info!("User {} already exists", username);
        return Ok(id);
    }

    let password_hash = hash_password(password)?;
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;

    info!("User created: {} ({})", username, role);
    Ok(id)
}

async fn get_or_create_student(
    pool: &PgPool,
    user_id: i64,
    student_code: &str,
    name: &str,
    semester: i32,
    email: &str,
) -> Result<i64, HostelError> {
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM students WHERE student_code = $1")
            .bind(student_code)
            .fetch_optional(pool)
            .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO students (user_id, student_code, name, semester, email) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(user_id)
    .bind(student_code)
    .bind(name)
    .bind(semester)
    .bind(email)
    .fetch_one(pool)
    .await?;

    info!("Student created: {} ({})", name, student_code);
    Ok(id)
}

async fn get_or_create_admin(
    pool: &PgPool,
    user_id: i64,
    admin_code: &str,
    name: &str,
    email: &str,
) -> Result<i64, HostelError> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM admins WHERE admin_code = $1")
        .bind(admin_code)
        .fetch_optional(pool)
        .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO admins (user_id, admin_code, name, email) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(user_id)
    .bind(admin_code)
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await?;

    info!("Admin created: {} ({})", name, admin_code);
    Ok(id)
}

async fn get_or_create_hostel(
    pool: &PgPool,
    name: &str,
    address: &str,
    hostel_type: &str,
    admin_id: i64,
) -> Result<i64, HostelError> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM hostels WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO hostels (name, address, hostel_type, admin_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(address)
    .bind(hostel_type)
    .bind(admin_id)
    .fetch_one(pool)
    .await?;

    info!("Hostel created: {}", name);
    Ok(id)
}

async fn get_or_create_wing(pool: &PgPool, name: &str, hostel_id: i64) -> Result<i64, HostelError> {
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM wings WHERE name = $1 AND hostel_id = $2")
            .bind(name)
            .bind(hostel_id)
            .fetch_optional(pool)
            .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO wings (name, hostel_id) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(hostel_id)
            .fetch_one(pool)
            .await?;

    Ok(id)
}

async fn get_or_create_floor(pool: &PgPool, number: i32, wing_id: i64) -> Result<i64, HostelError> {
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM floors WHERE number = $1 AND wing_id = $2")
            .bind(number)
            .bind(wing_id)
            .fetch_optional(pool)
            .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO floors (number, wing_id) VALUES ($1, $2) RETURNING id")
            .bind(number)
            .bind(wing_id)
            .fetch_one(pool)
            .await?;

    Ok(id)
}

async fn get_or_create_room(
    pool: &PgPool,
    number: &str,
    room_type: &str,
    occupancy: &str,
    capacity: i32,
    floor_id: i64,
) -> Result<i64, HostelError> {
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM rooms WHERE number = $1 AND floor_id = $2")
            .bind(number)
            .bind(floor_id)
            .fetch_optional(pool)
            .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO rooms (number, room_type, occupancy, capacity, floor_id) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(number)
    .bind(room_type)
    .bind(occupancy)
    .bind(capacity)
    .bind(floor_id)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

async fn seed_pending_application(
    pool: &PgPool,
    student_id: i64,
    room_type: &str,
    occupancy: &str,
) -> Result<(), HostelError> {
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM applications WHERE student_id = $1)")
            .bind(student_id)
            .fetch_one(pool)
            .await?;

    if exists.0 {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO applications (room_type, occupancy, status, student_id) VALUES ($1, $2, 'pending', $3)",
    )
    .bind(room_type)
    .bind(occupancy)
    .bind(student_id)
    .execute(pool)
    .await?;

    info!(student_id = student_id, "Sample pending application created");
    Ok(())
}

async fn seed_approved_application(
    pool: &PgPool,
    student_id: i64,
    room_type: &str,
    occupancy: &str,
    room_id: i64,
) -> Result<(), HostelError> {
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM applications WHERE student_id = $1)")
            .bind(student_id)
            .fetch_one(pool)
            .await?;

    if exists.0 {
        return Ok(());
    }

    // Only a freshly created approval adjusts room and student bookkeeping,
    // so a rerun cannot double-count.
    sqlx::query(
        "INSERT INTO applications (room_type, occupancy, status, student_id, room_id) VALUES ($1, $2, 'approved', $3, $4)",
    )
    .bind(room_type)
    .bind(occupancy)
    .bind(student_id)
    .bind(room_id)
    .execute(pool)
    .await?;

    sqlx::query("UPDATE rooms SET current_occupants = current_occupants + 1 WHERE id = $1")
        .bind(room_id)
        .execute(pool)
        .await?;

    sqlx::query("UPDATE students SET application_status = TRUE WHERE id = $1")
        .bind(student_id)
        .execute(pool)
        .await?;

    info!(
        student_id = student_id,
        room_id = room_id,
        "Sample approved application created"
    );
    Ok(())
}

async fn seed_complaint(
    pool: &PgPool,
    student_id: i64,
    description: &str,
    status: ComplaintStatus,
) -> Result<(), HostelError> {
    let exists: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM complaints WHERE student_id = $1 AND description = $2)",
    )
    .bind(student_id)
    .bind(description)
    .fetch_one(pool)
    .await?;

    if exists.0 {
        return Ok(());
    }

    sqlx::query("INSERT INTO complaints (description, status, student_id) VALUES ($1, $2, $3)")
        .bind(description)
        .bind(status.as_str())
        .bind(student_id)
        .execute(pool)
        .await?;

    info!(student_id = student_id, "Sample complaint created");
    Ok(())
}

async fn summarize(pool: &PgPool) -> Result<SeedSummary, HostelError> {
    async fn count(pool: &PgPool, table: &str) -> Result<i64, HostelError> {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    Ok(SeedSummary {
        users: count(pool, "users").await?,
        students: count(pool, "students").await?,
        admins: count(pool, "admins").await?,
        hostels: count(pool, "hostels").await?,
        wings: count(pool, "wings").await?,
        floors: count(pool, "floors").await?,
        rooms: count(pool, "rooms").await?,
        applications: count(pool, "applications").await?,
        complaints: count(pool, "complaints").await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_taxonomy_sizes() {
        assert_eq!(STUDENTS.len(), 3);
        assert_eq!(HOSTELS.len(), 2);
        assert_eq!(WINGS.len(), 3);
        assert_eq!(FLOORS.len(), 4);
        assert_eq!(ROOMS.len(), 8);
        assert_eq!(COMPLAINTS.len(), 3);
    }

    #[test]
    fn test_seed_indices_are_in_bounds() {
        for (_, hostel_idx) in WINGS {
            assert!(hostel_idx < HOSTELS.len());
        }
        for (_, wing_idx) in FLOORS {
            assert!(wing_idx < WINGS.len());
        }
        for (_, _, _, floor_idx) in ROOMS {
            assert!(floor_idx < FLOORS.len());
        }
        for (student_idx, _, _) in COMPLAINTS {
            assert!(student_idx < STUDENTS.len());
        }
    }

    #[test]
    fn test_capacity_tracks_occupancy() {
        assert_eq!(capacity_for("Single"), 1);
        assert_eq!(capacity_for("Double"), 2);
        assert_eq!(capacity_for("Triple"), 3);
    }
}
