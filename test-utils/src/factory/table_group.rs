//! Table group factory for creating test table group entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a table group dated now.
///
/// Member tables are assigned separately through
/// `OrderTableFactory::table_group_id`.
pub async fn create_table_group(
    db: &DatabaseConnection,
) -> Result<entity::table_group::Model, DbErr> {
    entity::table_group::ActiveModel {
        id: ActiveValue::NotSet,
        created_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
