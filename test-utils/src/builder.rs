use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{MenuGroup, Product};
///
/// let test = TestBuilder::new()
///     .with_table(MenuGroup)
///     .with_table(Product)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the catalog tables: MenuGroup, Product, Menu and MenuProduct.
    pub fn with_menu_tables(self) -> Self {
        self.with_table(MenuGroup)
            .with_table(Product)
            .with_table(Menu)
            .with_table(MenuProduct)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// This adds the catalog tables from `with_menu_tables()` followed by:
    /// - TableGroup
    /// - OrderTable
    /// - Order
    /// - OrderLineItem
    pub fn with_kitchen_tables(self) -> Self {
        self.with_menu_tables()
            .with_table(TableGroup)
            .with_table(OrderTable)
            .with_table(Order)
            .with_table(OrderLineItem)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
