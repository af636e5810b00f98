use sea_orm_migration::{prelude::*, schema::*};

use super::m20261002_000006_create_order_table_table::OrderTable;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::OrderTableId))
                    .col(string_len(Orders::OrderStatus, 16))
                    .col(timestamp(Orders::OrderedTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_order_table_id")
                            .from(Orders::Table, Orders::OrderTableId)
                            .to(OrderTable::Table, OrderTable::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Table status checks filter on (order_table_id, order_status)
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_order_table_id_order_status")
                    .table(Orders::Table)
                    .col(Orders::OrderTableId)
                    .col(Orders::OrderStatus)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    OrderTableId,
    OrderStatus,
    OrderedTime,
}
