//! Session identity service.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{session::user::SessionUserId, tenant::SessionUser},
};

/// Service resolving the session's user id against the user table.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the authenticated user behind the session with their current role.
    ///
    /// The role is read from the database on every call rather than trusted from the session.
    ///
    /// # Returns
    /// - `Ok(Some(SessionUser))` - Session holds the ID of an existing user
    /// - `Ok(None)` - Session is not authenticated
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - Session referenced a user that
    ///   no longer exists; the session has been cleared
    /// - `Err(Error::DbErr)` / `Err(Error::SessionError)` - Infrastructure failure
    pub async fn get_session_user(&self, session: &Session) -> Result<Option<SessionUser>, Error> {
        let Some(user_id) = SessionUserId::get(session).await? else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(user_id).await? {
            Some(user) => Ok(Some(SessionUser::from(user))),
            None => {
                session.clear().await;

                Err(AuthError::UserNotInDatabase(user_id).into())
            }
        }
    }
}
