//! Domain & parameter models for table group operations

use chrono::{DateTime, Utc};

use crate::{
    model::table_group::{CreateTableGroupDto, TableGroupDto},
    server::{error::table::TableGroupError, model::table::OrderTable},
};

/// Minimum number of order tables a table group must contain
pub const MIN_TABLE_SIZE: usize = 2;

/// The table group domain model with its member tables
#[derive(Debug, Clone, PartialEq)]
pub struct TableGroup {
    pub id: i32,
    pub created_date: DateTime<Utc>,
    pub order_tables: Vec<OrderTable>,
}

impl TableGroup {
    /// Converts a table group entity and its already converted member tables
    pub fn from_entity(entity: entity::table_group::Model, order_tables: Vec<OrderTable>) -> Self {
        Self {
            id: entity.id,
            created_date: entity.created_date,
            order_tables,
        }
    }

    pub fn into_dto(self) -> TableGroupDto {
        TableGroupDto {
            id: self.id,
            created_date: self.created_date,
            order_tables: self
                .order_tables
                .into_iter()
                .map(OrderTable::into_dto)
                .collect(),
        }
    }
}

/// Parameters for grouping order tables
#[derive(Debug, Clone)]
pub struct CreateTableGroupParam {
    pub order_table_ids: Vec<i32>,
}

impl CreateTableGroupParam {
    /// Returns the requested table IDs with duplicates removed, keeping request order
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - At least `MIN_TABLE_SIZE` distinct table IDs
    /// - `Err(TableGroupError::NotEnoughTables)` - Fewer distinct IDs than required
    pub fn distinct_table_ids(&self) -> Result<Vec<i32>, TableGroupError> {
        let mut ids: Vec<i32> = Vec::with_capacity(self.order_table_ids.len());
        for id in &self.order_table_ids {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }

        if ids.len() < MIN_TABLE_SIZE {
            return Err(TableGroupError::NotEnoughTables(MIN_TABLE_SIZE));
        }

        Ok(ids)
    }
}

impl From<CreateTableGroupDto> for CreateTableGroupParam {
    fn from(dto: CreateTableGroupDto) -> Self {
        Self {
            order_table_ids: dto.order_table_ids,
        }
    }
}
