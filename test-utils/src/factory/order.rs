//! Order factory for creating test order and order line item entities.

use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// The status is written as the raw column value, `"COOKING"` by default.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, table.id)
///     .order_status("COMPLETION")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::order::Model,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new factory for an order placed on the given table.
    pub fn new(db: &'a DatabaseConnection, order_table_id: i32) -> Self {
        let entity = fixture::order::entity_builder()
            .order_table_id(order_table_id)
            .build();

        Self { db, entity }
    }

    pub fn order_status(mut self, order_status: impl Into<String>) -> Self {
        self.entity.order_status = order_status.into();
        self
    }

    pub fn ordered_time(mut self, ordered_time: DateTime<Utc>) -> Self {
        self.entity.ordered_time = ordered_time;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// No line items are created, use `create_order_line_item` for those.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            order_table_id: ActiveValue::Set(self.entity.order_table_id),
            order_status: ActiveValue::Set(self.entity.order_status),
            ordered_time: ActiveValue::Set(self.entity.ordered_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `COOKING` order on the given table.
pub async fn create_order(
    db: &DatabaseConnection,
    order_table_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, order_table_id).build().await
}

/// Adds a line item to an order, copying the menu's name and price.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_id` - Order the line item belongs to
/// - `menu` - Ordered menu
/// - `quantity` - Number of servings ordered
pub async fn create_order_line_item(
    db: &DatabaseConnection,
    order_id: i32,
    menu: &entity::menu::Model,
    quantity: i64,
) -> Result<entity::order_line_item::Model, DbErr> {
    entity::order_line_item::ActiveModel {
        seq: ActiveValue::NotSet,
        order_id: ActiveValue::Set(order_id),
        menu_id: ActiveValue::Set(menu.id),
        name: ActiveValue::Set(menu.name.clone()),
        price: ActiveValue::Set(menu.price),
        quantity: ActiveValue::Set(quantity),
    }
    .insert(db)
    .await
}
