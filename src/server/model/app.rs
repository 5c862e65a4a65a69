use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Key signing the impersonation cookie
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl From<(DatabaseConnection, Key)> for AppState {
    fn from((db, cookie_key): (DatabaseConnection, Key)) -> Self {
        Self { db, cookie_key }
    }
}
