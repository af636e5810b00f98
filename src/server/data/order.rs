//! Order data repository for database operations
//!
//! Provides the `OrderRepository` for placing orders with their line items, reading them
//! back with line items attached, changing order status, and answering the status
//! queries the table services depend on.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    error::{internal::InternalError, AppError},
    model::order::{NewOrder, Order, OrderStatus},
};

/// Repository providing database operations for orders and their line items.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new OrderRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `OrderRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order and all of its line items
    ///
    /// # Arguments
    /// - `order` - Validated order carrying the menu snapshot for each line item
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its line items
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, order: NewOrder) -> Result<Order, AppError> {
        let model = entity::order::ActiveModel {
            order_table_id: ActiveValue::Set(order.order_table_id),
            order_status: ActiveValue::Set(order.order_status.as_str().to_string()),
            ordered_time: ActiveValue::Set(order.ordered_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut line_items = Vec::with_capacity(order.order_line_items.len());
        for item in order.order_line_items {
            let line_item = entity::order_line_item::ActiveModel {
                order_id: ActiveValue::Set(model.id),
                menu_id: ActiveValue::Set(item.menu_id),
                name: ActiveValue::Set(item.name),
                price: ActiveValue::Set(item.price),
                quantity: ActiveValue::Set(item.quantity),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            line_items.push(line_item);
        }

        Order::from_entity(model, line_items)
    }

    /// Gets all orders in insertion order with their line items
    pub async fn find_all(&self) -> Result<Vec<Order>, AppError> {
        let orders = entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let mut items_by_order: HashMap<i32, Vec<entity::order_line_item::Model>> =
            HashMap::new();
        for item in entity::prelude::OrderLineItem::find()
            .filter(entity::order_line_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_line_item::Column::Seq)
            .all(self.db)
            .await?
        {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        orders
            .into_iter()
            .map(|order| {
                let line_items = items_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, line_items)
            })
            .collect()
    }

    /// Finds an order by ID with its line items
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The order if found
    /// - `Ok(None)` - No order with the provided ID exists
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let line_items = entity::prelude::OrderLineItem::find()
            .filter(entity::order_line_item::Column::OrderId.eq(id))
            .order_by_asc(entity::order_line_item::Column::Seq)
            .all(self.db)
            .await?;

        Order::from_entity(order, line_items).map(Some)
    }

    /// Sets the status of an order and returns the updated order
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order with its line items
    /// - `Err(AppError::DbErr)` - Database error, including the order not existing
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, AppError> {
        entity::order::ActiveModel {
            id: ActiveValue::Unchanged(id),
            order_status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "Order",
                    id,
                }
                .into()
            })
    }

    /// Checks whether any of the tables has an order in one of the provided statuses
    ///
    /// # Arguments
    /// - `order_table_ids` - Tables to check
    /// - `statuses` - Statuses to match, e.g. `OrderStatus::IN_PROGRESS`
    pub async fn exists_by_order_table_ids_and_status_in(
        &self,
        order_table_ids: &[i32],
        statuses: &[OrderStatus],
    ) -> Result<bool, AppError> {
        if order_table_ids.is_empty() || statuses.is_empty() {
            return Ok(false);
        }

        let count = entity::prelude::Order::find()
            .filter(entity::order::Column::OrderTableId.is_in(order_table_ids.to_vec()))
            .filter(
                entity::order::Column::OrderStatus
                    .is_in(statuses.iter().map(|s| s.as_str()).collect::<Vec<_>>()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a single table has an order in one of the provided statuses
    pub async fn exists_by_order_table_id_and_status_in(
        &self,
        order_table_id: i32,
        statuses: &[OrderStatus],
    ) -> Result<bool, AppError> {
        self.exists_by_order_table_ids_and_status_in(&[order_table_id], statuses)
            .await
    }
}
