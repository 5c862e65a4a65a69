//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, an in-memory session and the key used to sign the impersonation
//! cookie.

use std::sync::Arc;

use axum_extra::extract::cookie::{Key, SignedCookieJar};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_COOKIE_SECRET, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_tenant_tables().build().await?;
///
/// let admin = test.user().insert_admin().await?;
/// let academy = test.academy().insert_onboarded_academy("north-fc").await?;
///
/// let jar = test.cookie_jar();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,
    /// Key signing the impersonation cookie
    pub cookie_key: Key,
}

impl TestContext {
    /// Convert database and cookie key into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main palaestra crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, Key)>,
    {
        T::from((self.db.clone(), self.cookie_key.clone()))
    }

    /// Empty signed cookie jar using the test key, as a fresh browser would send.
    pub fn cookie_jar(&self) -> SignedCookieJar {
        SignedCookieJar::new(self.cookie_key.clone())
    }

    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            cookie_key: Key::from(TEST_COOKIE_SECRET),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
