use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusDto {
    Cooking,
    Meal,
    Completion,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderLineItemDto {
    pub menu_id: i32,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub order_table_id: i32,
    /// Defaults to `COOKING` when omitted
    #[serde(default)]
    pub order_status: Option<OrderStatusDto>,
    /// Defaults to the current time when omitted
    #[serde(default)]
    pub ordered_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order_line_items: Vec<CreateOrderLineItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChangeOrderStatusDto {
    pub order_status: OrderStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderLineItemDto {
    pub seq: i32,
    pub order_id: i32,
    pub menu_id: i32,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub order_table_id: i32,
    pub order_status: OrderStatusDto,
    pub ordered_time: DateTime<Utc>,
    pub order_line_items: Vec<OrderLineItemDto>,
}
