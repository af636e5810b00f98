use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{order::OrderRepository, order_table::OrderTableRepository},
    error::{table::TableError, AppError},
    model::{
        order::OrderStatus,
        table::{CreateOrderTableParam, OrderTable},
    },
};

pub struct TableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new order table outside of any table group
    pub async fn create(&self, param: CreateOrderTableParam) -> Result<OrderTable, AppError> {
        let order_table = OrderTableRepository::new(self.db).create(param).await?;

        tracing::info!(order_table_id = order_table.id, "Created order table");

        Ok(order_table)
    }

    /// Gets all order tables in insertion order
    pub async fn list(&self) -> Result<Vec<OrderTable>, AppError> {
        Ok(OrderTableRepository::new(self.db).find_all().await?)
    }

    /// Marks an order table as empty or occupied
    ///
    /// # Returns
    /// - `Ok(OrderTable)` - The updated order table
    /// - `Err(AppError::TableErr(OrderTableNotFound))` - The order table does not exist
    /// - `Err(AppError::TableErr(GroupedTable))` - The order table belongs to a table group
    /// - `Err(AppError::TableErr(OrderInProgress))` - The table has a `COOKING` or `MEAL` order
    pub async fn change_empty(
        &self,
        order_table_id: i32,
        empty: bool,
    ) -> Result<OrderTable, AppError> {
        let txn = self.db.begin().await?;
        let table_repo = OrderTableRepository::new(&txn);

        let order_table = table_repo
            .find_by_id(order_table_id)
            .await?
            .ok_or(TableError::OrderTableNotFound)?;

        if order_table.is_grouped() {
            return Err(TableError::GroupedTable(order_table_id).into());
        }

        if OrderRepository::new(&txn)
            .exists_by_order_table_id_and_status_in(order_table_id, &OrderStatus::IN_PROGRESS)
            .await?
        {
            return Err(TableError::OrderInProgress(order_table_id).into());
        }

        let updated = table_repo.update_empty(order_table_id, empty).await?;

        txn.commit().await?;

        tracing::debug!(order_table_id, empty, "Changed order table empty state");

        Ok(updated)
    }

    /// Records the number of guests seated at an occupied order table
    ///
    /// # Returns
    /// - `Ok(OrderTable)` - The updated order table
    /// - `Err(AppError::TableErr(InvalidNumberOfGuests))` - The number is negative
    /// - `Err(AppError::TableErr(OrderTableNotFound))` - The order table does not exist
    /// - `Err(AppError::TableErr(EmptyTable))` - The order table is empty
    pub async fn change_number_of_guests(
        &self,
        order_table_id: i32,
        number_of_guests: i32,
    ) -> Result<OrderTable, AppError> {
        if number_of_guests < 0 {
            return Err(TableError::InvalidNumberOfGuests.into());
        }

        let txn = self.db.begin().await?;
        let table_repo = OrderTableRepository::new(&txn);

        let order_table = table_repo
            .find_by_id(order_table_id)
            .await?
            .ok_or(TableError::OrderTableNotFound)?;

        if order_table.empty {
            return Err(TableError::EmptyTable(order_table_id).into());
        }

        let updated = table_repo
            .update_number_of_guests(order_table_id, number_of_guests)
            .await?;

        txn.commit().await?;

        tracing::debug!(order_table_id, number_of_guests, "Changed number of guests");

        Ok(updated)
    }
}
