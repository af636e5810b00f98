use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000003_create_menu_table::Menu, m20261003_000007_create_orders_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderLineItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderLineItem::Seq))
                    .col(integer(OrderLineItem::OrderId))
                    .col(integer(OrderLineItem::MenuId))
                    .col(string(OrderLineItem::Name))
                    .col(big_integer(OrderLineItem::Price))
                    .col(big_integer(OrderLineItem::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_line_item_order_id")
                            .from(OrderLineItem::Table, OrderLineItem::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_line_item_menu_id")
                            .from(OrderLineItem::Table, OrderLineItem::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderLineItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderLineItem {
    Table,
    Seq,
    OrderId,
    MenuId,
    Name,
    Price,
    Quantity,
}
