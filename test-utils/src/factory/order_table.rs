//! Order table factory for creating test order table entities.
//!
//! Defaults are sourced from `fixture::order_table`, so tables start empty and
//! ungrouped.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test order tables.
///
/// # Example
///
/// ```rust,ignore
/// let table = OrderTableFactory::new(&db)
///     .empty(false)
///     .number_of_guests(4)
///     .build()
///     .await?;
/// ```
pub struct OrderTableFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::order_table::Model,
}

impl<'a> OrderTableFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: fixture::order_table::entity(),
        }
    }

    /// Assigns the table to a table group.
    pub fn table_group_id(mut self, table_group_id: Option<i32>) -> Self {
        self.entity.table_group_id = table_group_id;
        self
    }

    pub fn number_of_guests(mut self, number_of_guests: i32) -> Self {
        self.entity.number_of_guests = number_of_guests;
        self
    }

    pub fn empty(mut self, empty: bool) -> Self {
        self.entity.empty = empty;
        self
    }

    /// Builds and inserts the order table entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order_table::Model)` - Created order table entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order_table::Model, DbErr> {
        entity::order_table::ActiveModel {
            id: ActiveValue::NotSet,
            table_group_id: ActiveValue::Set(self.entity.table_group_id),
            number_of_guests: ActiveValue::Set(self.entity.number_of_guests),
            empty: ActiveValue::Set(self.entity.empty),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty, ungrouped order table.
pub async fn create_order_table(
    db: &DatabaseConnection,
) -> Result<entity::order_table::Model, DbErr> {
    OrderTableFactory::new(db).build().await
}

/// Creates an ungrouped table seating two guests.
pub async fn create_occupied_table(
    db: &DatabaseConnection,
) -> Result<entity::order_table::Model, DbErr> {
    OrderTableFactory::new(db)
        .empty(false)
        .number_of_guests(2)
        .build()
        .await
}
