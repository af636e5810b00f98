//! Table grouping business logic.
//!
//! A table group joins at least `MIN_TABLE_SIZE` empty, ungrouped tables. Grouped tables
//! become occupied; ungrouping detaches them and marks them empty again, which is only
//! allowed once none of them has an order in progress.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        order::OrderRepository, order_table::OrderTableRepository,
        table_group::TableGroupRepository,
    },
    error::{internal::InternalError, table::TableGroupError, AppError},
    model::{
        order::OrderStatus,
        table_group::{CreateTableGroupParam, TableGroup},
    },
};

pub struct TableGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Groups the requested order tables
    ///
    /// # Returns
    /// - `Ok(TableGroup)` - The created group with its member tables
    /// - `Err(AppError::TableGroupErr(NotEnoughTables))` - Fewer than two distinct tables
    /// - `Err(AppError::TableGroupErr(OrderTableNotFound))` - A requested table does not exist
    /// - `Err(AppError::TableGroupErr(TableNotAvailable))` - A requested table is occupied or
    ///   already grouped
    pub async fn create(&self, param: CreateTableGroupParam) -> Result<TableGroup, AppError> {
        let order_table_ids = param.distinct_table_ids()?;

        let txn = self.db.begin().await?;
        let table_repo = OrderTableRepository::new(&txn);

        let order_tables = table_repo.find_all_by_ids(&order_table_ids).await?;
        if order_tables.len() != order_table_ids.len() {
            return Err(TableGroupError::OrderTableNotFound.into());
        }

        if let Some(unavailable) = order_tables.iter().find(|t| !t.is_groupable()) {
            return Err(TableGroupError::TableNotAvailable(unavailable.id).into());
        }

        let group_repo = TableGroupRepository::new(&txn);
        let table_group_id = group_repo.create(Utc::now()).await?;

        table_repo
            .update_table_group(&order_table_ids, Some(table_group_id), false)
            .await?;

        let table_group = group_repo.find_by_id(table_group_id).await?.ok_or(
            InternalError::MissingAfterWrite {
                entity: "TableGroup",
                id: table_group_id,
            },
        )?;

        txn.commit().await?;

        tracing::info!(
            table_group_id,
            tables = ?order_table_ids,
            "Created table group"
        );

        Ok(table_group)
    }

    /// Detaches every table from the group and marks the tables empty
    ///
    /// # Returns
    /// - `Ok(())` - The group was ungrouped
    /// - `Err(AppError::TableGroupErr(TableGroupNotFound))` - The group does not exist
    /// - `Err(AppError::TableGroupErr(OrderInProgress))` - A member table has a `COOKING`
    ///   or `MEAL` order
    pub async fn ungroup(&self, table_group_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let table_group = TableGroupRepository::new(&txn)
            .find_by_id(table_group_id)
            .await?
            .ok_or(TableGroupError::TableGroupNotFound)?;

        let order_table_ids: Vec<i32> = table_group.order_tables.iter().map(|t| t.id).collect();

        if OrderRepository::new(&txn)
            .exists_by_order_table_ids_and_status_in(&order_table_ids, &OrderStatus::IN_PROGRESS)
            .await?
        {
            return Err(TableGroupError::OrderInProgress.into());
        }

        OrderTableRepository::new(&txn)
            .update_table_group(&order_table_ids, None, true)
            .await?;

        txn.commit().await?;

        tracing::info!(table_group_id, "Ungrouped table group");

        Ok(())
    }
}
