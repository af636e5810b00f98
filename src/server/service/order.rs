//! Order lifecycle business logic.
//!
//! Placing an order validates the line items, the referenced menus and the order table
//! before anything is written. Status changes are refused once an order has reached
//! `COMPLETION`.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{menu::MenuRepository, order::OrderRepository, order_table::OrderTableRepository},
    error::{order::OrderError, AppError},
    model::order::{
        ChangeOrderStatusParam, CreateOrderParam, NewOrder, NewOrderLineItem, Order,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a new order on a table
    ///
    /// Checks run in this order: line items present, every quantity positive, every menu
    /// exists, the order table exists, the order table is occupied. Each line item copies
    /// the menu's current name and price.
    ///
    /// # Arguments
    /// - `param` - Order table, optional initial status & time, and requested line items
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its line items
    /// - `Err(AppError::OrderErr(EmptyLineItems))` - No line items were provided
    /// - `Err(AppError::OrderErr(InvalidQuantity))` - A line item quantity is zero or less
    /// - `Err(AppError::OrderErr(MenuNotFound))` - A line item references a missing menu
    /// - `Err(AppError::OrderErr(OrderTableNotFound))` - The order table does not exist
    /// - `Err(AppError::OrderErr(OrderTableEmpty))` - The order table is empty
    pub async fn create(&self, param: CreateOrderParam) -> Result<Order, AppError> {
        if param.order_line_items.is_empty() {
            return Err(OrderError::EmptyLineItems.into());
        }

        if let Some(item) = param.order_line_items.iter().find(|item| item.quantity <= 0) {
            return Err(OrderError::InvalidQuantity(item.menu_id).into());
        }

        let txn = self.db.begin().await?;

        let menu_ids = param.menu_ids();
        let menus: HashMap<i32, _> = MenuRepository::new(&txn)
            .find_all_by_ids(&menu_ids)
            .await?
            .into_iter()
            .map(|menu| (menu.id, menu))
            .collect();

        if menus.len() != menu_ids.len() {
            return Err(OrderError::MenuNotFound.into());
        }

        let order_table = OrderTableRepository::new(&txn)
            .find_by_id(param.order_table_id)
            .await?
            .ok_or(OrderError::OrderTableNotFound)?;

        if order_table.empty {
            return Err(OrderError::OrderTableEmpty(order_table.id).into());
        }

        let mut order_line_items = Vec::with_capacity(param.order_line_items.len());
        for item in param.order_line_items {
            let menu = menus.get(&item.menu_id).ok_or(OrderError::MenuNotFound)?;
            order_line_items.push(NewOrderLineItem {
                menu_id: menu.id,
                name: menu.name.clone(),
                price: menu.price,
                quantity: item.quantity,
            });
        }

        let order = OrderRepository::new(&txn)
            .create(NewOrder {
                order_table_id: order_table.id,
                order_status: param.order_status.unwrap_or_default(),
                ordered_time: param.ordered_time.unwrap_or_else(Utc::now),
                order_line_items,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            order_id = order.id,
            order_table_id = order.order_table_id,
            status = %order.order_status,
            "Created order"
        );

        Ok(order)
    }

    /// Gets all orders in insertion order with their line items
    pub async fn list(&self) -> Result<Vec<Order>, AppError> {
        OrderRepository::new(self.db).find_all().await
    }

    /// Changes the status of an order that has not been completed yet
    ///
    /// # Arguments
    /// - `order_id` - ID of the order to update
    /// - `param` - The new status
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order
    /// - `Err(AppError::OrderErr(OrderNotFound))` - The order does not exist
    /// - `Err(AppError::OrderErr(AlreadyCompleted))` - The order is already `COMPLETION`
    pub async fn change_order_status(
        &self,
        order_id: i32,
        param: ChangeOrderStatusParam,
    ) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let repo = OrderRepository::new(&txn);

        let order = repo
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound)?;

        if order.order_status.is_completed() {
            return Err(OrderError::AlreadyCompleted.into());
        }

        let updated = repo.update_status(order_id, param.order_status).await?;

        txn.commit().await?;

        tracing::info!(
            order_id,
            from = %order.order_status,
            to = %updated.order_status,
            "Changed order status"
        );

        Ok(updated)
    }
}
