use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{NewOrder, NewOrderLineItem, OrderStatus},
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod exists_by_order_table_ids_and_status_in;
mod find_all;
mod update_status;
