//! Order table data repository for database operations
//!
//! Provides the `OrderTableRepository` for creating, reading and updating order tables,
//! including the bulk updates used when tables join or leave a table group.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::table::{CreateOrderTableParam, OrderTable};

/// Repository providing database operations for order table management.
pub struct OrderTableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderTableRepository<'a, C> {
    /// Creates a new OrderTableRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new order table that does not belong to any table group
    pub async fn create(&self, param: CreateOrderTableParam) -> Result<OrderTable, DbErr> {
        let model = entity::order_table::ActiveModel {
            table_group_id: ActiveValue::Set(None),
            number_of_guests: ActiveValue::Set(param.number_of_guests),
            empty: ActiveValue::Set(param.empty),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OrderTable::from_entity(model))
    }

    /// Gets all order tables in insertion order
    pub async fn find_all(&self) -> Result<Vec<OrderTable>, DbErr> {
        let tables = entity::prelude::OrderTable::find()
            .order_by_asc(entity::order_table::Column::Id)
            .all(self.db)
            .await?;

        Ok(tables.into_iter().map(OrderTable::from_entity).collect())
    }

    /// Finds an order table by ID
    ///
    /// # Returns
    /// - `Ok(Some(OrderTable))` - The order table if found
    /// - `Ok(None)` - No order table with the provided ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<OrderTable>, DbErr> {
        let table = entity::prelude::OrderTable::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(table.map(OrderTable::from_entity))
    }

    /// Gets the order tables matching any of the provided IDs, ordered by ID
    pub async fn find_all_by_ids(&self, ids: &[i32]) -> Result<Vec<OrderTable>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let tables = entity::prelude::OrderTable::find()
            .filter(entity::order_table::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::order_table::Column::Id)
            .all(self.db)
            .await?;

        Ok(tables.into_iter().map(OrderTable::from_entity).collect())
    }

    /// Gets the order tables belonging to a table group, ordered by ID
    pub async fn find_all_by_table_group_id(
        &self,
        table_group_id: i32,
    ) -> Result<Vec<OrderTable>, DbErr> {
        let tables = entity::prelude::OrderTable::find()
            .filter(entity::order_table::Column::TableGroupId.eq(table_group_id))
            .order_by_asc(entity::order_table::Column::Id)
            .all(self.db)
            .await?;

        Ok(tables.into_iter().map(OrderTable::from_entity).collect())
    }

    /// Sets whether the order table is empty
    pub async fn update_empty(&self, id: i32, empty: bool) -> Result<OrderTable, DbErr> {
        let model = entity::order_table::ActiveModel {
            id: ActiveValue::Unchanged(id),
            empty: ActiveValue::Set(empty),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(OrderTable::from_entity(model))
    }

    /// Sets the number of guests seated at the order table
    pub async fn update_number_of_guests(
        &self,
        id: i32,
        number_of_guests: i32,
    ) -> Result<OrderTable, DbErr> {
        let model = entity::order_table::ActiveModel {
            id: ActiveValue::Unchanged(id),
            number_of_guests: ActiveValue::Set(number_of_guests),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(OrderTable::from_entity(model))
    }

    /// Assigns the provided tables to a table group, or detaches them with `None`
    ///
    /// # Arguments
    /// - `ids` - IDs of the order tables to update
    /// - `table_group_id` - Group to assign, `None` to detach
    /// - `empty` - Empty state to set on every updated table
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of updated rows
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_table_group(
        &self,
        ids: &[i32],
        table_group_id: Option<i32>,
        empty: bool,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::OrderTable::update_many()
            .col_expr(
                entity::order_table::Column::TableGroupId,
                Expr::value(table_group_id),
            )
            .col_expr(entity::order_table::Column::Empty, Expr::value(empty))
            .filter(entity::order_table::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
