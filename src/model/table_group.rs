use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::table::OrderTableDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTableGroupDto {
    pub order_table_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TableGroupDto {
    pub id: i32,
    pub created_date: DateTime<Utc>,
    pub order_tables: Vec<OrderTableDto>,
}
