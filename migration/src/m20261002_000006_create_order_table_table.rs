use sea_orm_migration::{prelude::*, schema::*};

use super::m20261002_000005_create_table_group_table::TableGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderTable::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderTable::Id))
                    .col(integer_null(OrderTable::TableGroupId))
                    .col(integer(OrderTable::NumberOfGuests).default(0))
                    .col(boolean(OrderTable::Empty).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_table_table_group_id")
                            .from(OrderTable::Table, OrderTable::TableGroupId)
                            .to(TableGroup::Table, TableGroup::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderTable {
    Table,
    Id,
    TableGroupId,
    NumberOfGuests,
    Empty,
}
