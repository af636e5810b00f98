//! Table group data repository for database operations

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::{data::order_table::OrderTableRepository, model::table_group::TableGroup};

pub struct TableGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a table group without members
    ///
    /// Member tables are attached afterwards through
    /// `OrderTableRepository::update_table_group`.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the created table group
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, created_date: DateTime<Utc>) -> Result<i32, DbErr> {
        let model = entity::table_group::ActiveModel {
            created_date: ActiveValue::Set(created_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.id)
    }

    /// Finds a table group by ID along with its member tables
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TableGroup>, DbErr> {
        let Some(group) = entity::prelude::TableGroup::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let order_tables = OrderTableRepository::new(self.db)
            .find_all_by_table_group_id(id)
            .await?;

        Ok(Some(TableGroup::from_entity(group, order_tables)))
    }
}
