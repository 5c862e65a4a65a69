//! Factory functions for generating in-memory database models.
//!
//! These models are never written to a database, suitable for unit tests of pure logic.

use chrono::Utc;
use entity::sea_orm_active_enums::{AcademyStatus, UserRole};

/// Create a mock user model.
pub fn mock_user_model(id: i32, role: UserRole) -> entity::academy_user::Model {
    entity::academy_user::Model {
        id,
        email: format!("user{}@palaestra.test", id),
        role,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock academy model owned by `user_id`.
///
/// # Arguments
/// - `id` - Academy record ID
/// - `user_id` - Owning user ID
/// - `slug` - URL slug of the academy
/// - `onboarded` - Whether onboarding was completed
/// - `status` - Review status of the academy
pub fn mock_academy_model(
    id: i32,
    user_id: i32,
    slug: &str,
    onboarded: bool,
    status: AcademyStatus,
) -> entity::academy::Model {
    entity::academy::Model {
        id,
        user_id,
        slug: slug.to_string(),
        onboarded,
        status,
        created_at: Utc::now().naive_utc(),
    }
}
