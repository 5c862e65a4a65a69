//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models of the generated `entity` crate.

/// User account, either an admin or the owner of one academy.
///
/// # Fields (from `entity::academy_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Unique login email
/// - `role` - `admin` or `academic`
/// - `created_at` - Timestamp when the user account was created
pub type UserModel = entity::academy_user::Model;

/// Academy owned by a user; the unit of tenant isolation.
///
/// # Fields (from `entity::academy::Model`)
/// - `id` - Primary key, the tenant id
/// - `user_id` - Owning user (unique)
/// - `slug` - URL slug, also used to derive the display name
/// - `onboarded` - Whether onboarding was completed
/// - `status` - Review status (`pending`, `approved`, `rejected`)
/// - `created_at` - Timestamp when the academy was created
pub type AcademyModel = entity::academy::Model;

/// Sport of the shared reference catalogue.
pub type SportModel = entity::sport::Model;
