pub use super::academy::Entity as Academy;
pub use super::academy_sport::Entity as AcademySport;
pub use super::academy_user::Entity as AcademyUser;
pub use super::sport::Entity as Sport;
