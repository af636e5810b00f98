//! Domain & parameter models for order operations
//!
//! Defines the order lifecycle status, the order and line item domain models, and the
//! parameters used to place an order or change its status.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::order::{
        ChangeOrderStatusDto, CreateOrderDto, OrderDto, OrderLineItemDto, OrderStatusDto,
    },
    server::error::{internal::InternalError, AppError},
};

/// Lifecycle status of an order
///
/// Orders move from `Cooking` to `Meal` to `Completion`. `Completion` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    /// Statuses that keep a table occupied
    pub const IN_PROGRESS: [OrderStatus; 2] = [OrderStatus::Cooking, OrderStatus::Meal];

    /// The value stored in the `order_status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cooking => "COOKING",
            Self::Meal => "MEAL",
            Self::Completion => "COMPLETION",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completion)
    }

    pub fn into_dto(self) -> OrderStatusDto {
        match self {
            Self::Cooking => OrderStatusDto::Cooking,
            Self::Meal => OrderStatusDto::Meal,
            Self::Completion => OrderStatusDto::Completion,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "COOKING" => Ok(Self::Cooking),
            "MEAL" => Ok(Self::Meal),
            "COMPLETION" => Ok(Self::Completion),
            other => Err(InternalError::ParseOrderStatus(other.to_string())),
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Cooking => Self::Cooking,
            OrderStatusDto::Meal => Self::Meal,
            OrderStatusDto::Completion => Self::Completion,
        }
    }
}

/// The order domain model with its line items
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_table_id: i32,
    pub order_status: OrderStatus,
    pub ordered_time: DateTime<Utc>,
    pub order_line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Converts an order entity and its line item entities to the order domain model
    ///
    /// # Arguments
    /// - `entity` - The order entity model from the database
    /// - `line_items` - Line item entity models belonging to the order
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order domain model
    /// - `Err(AppError::InternalErr(ParseOrderStatus))` - Stored status is unknown
    pub fn from_entity(
        entity: entity::order::Model,
        line_items: Vec<entity::order_line_item::Model>,
    ) -> Result<Self, AppError> {
        let order_status = entity.order_status.parse::<OrderStatus>()?;

        Ok(Self {
            id: entity.id,
            order_table_id: entity.order_table_id,
            order_status,
            ordered_time: entity.ordered_time,
            order_line_items: line_items
                .into_iter()
                .map(OrderLineItem::from_entity)
                .collect(),
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_table_id: self.order_table_id,
            order_status: self.order_status.into_dto(),
            ordered_time: self.ordered_time,
            order_line_items: self
                .order_line_items
                .into_iter()
                .map(OrderLineItem::into_dto)
                .collect(),
        }
    }
}

/// A menu ordered as part of an order
///
/// `name` and `price` are copied from the menu when the order is placed so later menu
/// changes do not alter past orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub seq: i32,
    pub order_id: i32,
    pub menu_id: i32,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

impl OrderLineItem {
    pub fn from_entity(entity: entity::order_line_item::Model) -> Self {
        Self {
            seq: entity.seq,
            order_id: entity.order_id,
            menu_id: entity.menu_id,
            name: entity.name,
            price: entity.price,
            quantity: entity.quantity,
        }
    }

    pub fn into_dto(self) -> OrderLineItemDto {
        OrderLineItemDto {
            seq: self.seq,
            order_id: self.order_id,
            menu_id: self.menu_id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Requested menu and quantity for a new order
#[derive(Debug, Clone)]
pub struct CreateOrderLineItemParam {
    pub menu_id: i32,
    pub quantity: i64,
}

/// Parameters for placing a new order
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub order_table_id: i32,
    /// Initial status, `Cooking` when not provided
    pub order_status: Option<OrderStatus>,
    /// Time the order was placed, the current time when not provided
    pub ordered_time: Option<DateTime<Utc>>,
    pub order_line_items: Vec<CreateOrderLineItemParam>,
}

impl CreateOrderParam {
    /// Distinct menu IDs referenced by the line items, in request order
    pub fn menu_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = Vec::with_capacity(self.order_line_items.len());
        for item in &self.order_line_items {
            if !ids.contains(&item.menu_id) {
                ids.push(item.menu_id);
            }
        }
        ids
    }
}

impl From<CreateOrderDto> for CreateOrderParam {
    fn from(dto: CreateOrderDto) -> Self {
        Self {
            order_table_id: dto.order_table_id,
            order_status: dto.order_status.map(OrderStatus::from),
            ordered_time: dto.ordered_time,
            order_line_items: dto
                .order_line_items
                .into_iter()
                .map(|item| CreateOrderLineItemParam {
                    menu_id: item.menu_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// A validated order ready to be persisted
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_table_id: i32,
    pub order_status: OrderStatus,
    pub ordered_time: DateTime<Utc>,
    pub order_line_items: Vec<NewOrderLineItem>,
}

/// A line item carrying the menu snapshot taken when the order is placed
#[derive(Debug, Clone)]
pub struct NewOrderLineItem {
    pub menu_id: i32,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

/// Parameters for changing the status of an existing order
#[derive(Debug, Clone)]
pub struct ChangeOrderStatusParam {
    pub order_status: OrderStatus,
}

impl From<ChangeOrderStatusDto> for ChangeOrderStatusParam {
    fn from(dto: ChangeOrderStatusDto) -> Self {
        Self {
            order_status: dto.order_status.into(),
        }
    }
}
