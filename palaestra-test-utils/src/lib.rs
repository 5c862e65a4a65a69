pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_tables, test_setup_with_tenant_tables, TestBuilder,
        TestContext, TestError,
    };
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

#[macro_export]
macro_rules! test_setup_with_tenant_tables {
    () => {{
        TestBuilder::new().with_tenant_tables().build().await
    }};
}
