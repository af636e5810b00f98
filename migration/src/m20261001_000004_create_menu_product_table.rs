use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_product_table::Product, m20261001_000003_create_menu_table::Menu,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuProduct::Seq))
                    .col(integer(MenuProduct::MenuId))
                    .col(integer(MenuProduct::ProductId))
                    .col(big_integer(MenuProduct::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_product_menu_id")
                            .from(MenuProduct::Table, MenuProduct::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_product_product_id")
                            .from(MenuProduct::Table, MenuProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuProduct {
    Table,
    Seq,
    MenuId,
    ProductId,
    Quantity,
}
