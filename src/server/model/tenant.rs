//! Domain types tenant resolution works on.

use entity::sea_orm_active_enums::{AcademyStatus, UserRole};

use crate::{
    model::tenant::AcademyStatusDto,
    server::model::db::{AcademyModel, UserModel},
};

/// Authenticated identity behind the current request.
///
/// The session only carries the user id; the role is read from the database on every
/// request so that a demoted admin loses admin rights immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: i32,
    pub role: UserRole,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl From<UserModel> for SessionUser {
    fn from(user: UserModel) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
        }
    }
}

/// Tenant directory entry of an academy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcademyRecord {
    pub id: i32,
    pub slug: String,
    pub onboarded: bool,
    pub status: AcademyStatus,
}

impl From<AcademyModel> for AcademyRecord {
    fn from(academy: AcademyModel) -> Self {
        Self {
            id: academy.id,
            slug: academy.slug,
            onboarded: academy.onboarded,
            status: academy.status,
        }
    }
}

impl From<AcademyStatus> for AcademyStatusDto {
    fn from(status: AcademyStatus) -> Self {
        match status {
            AcademyStatus::Pending => Self::Pending,
            AcademyStatus::Approved => Self::Approved,
            AcademyStatus::Rejected => Self::Rejected,
        }
    }
}
