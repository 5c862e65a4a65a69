//! Declarative test builder.
//!
//! Configuration methods are queued and executed during the final `build()` call, in the order
//! tables, sports, users, academies.

use entity::sea_orm_active_enums::{AcademyStatus, UserRole};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_tenant_tables: bool,

    sports: Vec<String>,
    users: Vec<(String, UserRole)>,
    academies: Vec<(usize, String, bool, AcademyStatus)>, // (user index, slug, onboarded, status)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tenant_tables: false,
            sports: Vec::new(),
            users: Vec::new(),
            academies: Vec::new(),
        }
    }

    /// Add every table needed for tenant resolution and sport selection:
    /// AcademyUser, Academy, Sport and AcademySport.
    pub fn with_tenant_tables(mut self) -> Self {
        self.include_tenant_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use palaestra_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), palaestra_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AcademyUser)
    ///     .with_table(Academy)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a sport into the reference catalogue.
    pub fn with_sport(mut self, name: impl Into<String>) -> Self {
        self.sports.push(name.into());
        self
    }

    /// Insert a user with the given role.
    ///
    /// Users are numbered in insertion order starting at 0; `with_academy` refers to them by
    /// that index.
    pub fn with_user(mut self, email: impl Into<String>, role: UserRole) -> Self {
        self.users.push((email.into(), role));
        self
    }

    /// Insert an academy owned by the user at `user_index`.
    pub fn with_academy(
        mut self,
        user_index: usize,
        slug: impl Into<String>,
        onboarded: bool,
        status: AcademyStatus,
    ) -> Self {
        self.academies
            .push((user_index, slug.into(), onboarded, status));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_tenant_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AcademyUser),
                schema.create_table_from_entity(entity::prelude::Academy),
                schema.create_table_from_entity(entity::prelude::Sport),
                schema.create_table_from_entity(entity::prelude::AcademySport),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for name in self.sports {
            setup.sport().insert_sport(&name).await?;
        }

        let mut user_ids = Vec::new();
        for (email, role) in self.users {
            let user = setup.user().insert_user(&email, role).await?;
            user_ids.push(user.id);
        }

        for (user_index, slug, onboarded, status) in self.academies {
            let user_id = user_ids[user_index];
            setup
                .academy()
                .insert_academy(user_id, &slug, onboarded, status)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
