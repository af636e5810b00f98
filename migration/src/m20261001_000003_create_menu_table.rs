use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_menu_group_table::MenuGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(pk_auto(Menu::Id))
                    .col(string(Menu::Name))
                    .col(big_integer(Menu::Price))
                    .col(integer(Menu::MenuGroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_menu_group_id")
                            .from(Menu::Table, Menu::MenuGroupId)
                            .to(MenuGroup::Table, MenuGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Menu {
    Table,
    Id,
    Name,
    Price,
    MenuGroupId,
}
