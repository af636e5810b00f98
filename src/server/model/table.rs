//! Domain & parameter models for order table operations

use crate::model::table::{CreateOrderTableDto, OrderTableDto};

/// The order table domain model
///
/// A table is either empty (no guests seated) or occupied, and optionally belongs to
/// a table group.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTable {
    pub id: i32,
    pub table_group_id: Option<i32>,
    pub number_of_guests: i32,
    pub empty: bool,
}

impl OrderTable {
    pub fn from_entity(entity: entity::order_table::Model) -> Self {
        Self {
            id: entity.id,
            table_group_id: entity.table_group_id,
            number_of_guests: entity.number_of_guests,
            empty: entity.empty,
        }
    }

    pub fn into_dto(self) -> OrderTableDto {
        OrderTableDto {
            id: self.id,
            table_group_id: self.table_group_id,
            number_of_guests: self.number_of_guests,
            empty: self.empty,
        }
    }

    pub fn is_grouped(&self) -> bool {
        self.table_group_id.is_some()
    }

    /// Whether the table can join a new table group
    pub fn is_groupable(&self) -> bool {
        self.empty && !self.is_grouped()
    }
}

/// Parameters for creating a new order table
///
/// New tables never belong to a table group.
#[derive(Debug, Clone)]
pub struct CreateOrderTableParam {
    pub number_of_guests: i32,
    pub empty: bool,
}

impl From<CreateOrderTableDto> for CreateOrderTableParam {
    fn from(dto: CreateOrderTableDto) -> Self {
        Self {
            number_of_guests: dto.number_of_guests,
            empty: dto.empty,
        }
    }
}
