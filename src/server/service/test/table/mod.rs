use crate::server::{
    error::{table::TableError, AppError},
    model::table::CreateOrderTableParam,
    service::table::TableService,
};
use test_utils::{builder::TestBuilder, factory};
