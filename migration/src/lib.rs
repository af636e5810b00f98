pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_menu_group_table;
mod m20261001_000002_create_product_table;
mod m20261001_000003_create_menu_table;
mod m20261001_000004_create_menu_product_table;
mod m20261002_000005_create_table_group_table;
mod m20261002_000006_create_order_table_table;
mod m20261003_000007_create_orders_table;
mod m20261003_000008_create_order_line_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_menu_group_table::Migration),
            Box::new(m20261001_000002_create_product_table::Migration),
            Box::new(m20261001_000003_create_menu_table::Migration),
            Box::new(m20261001_000004_create_menu_product_table::Migration),
            Box::new(m20261002_000005_create_table_group_table::Migration),
            Box::new(m20261002_000006_create_order_table_table::Migration),
            Box::new(m20261003_000007_create_orders_table::Migration),
            Box::new(m20261003_000008_create_order_line_item_table::Migration),
        ]
    }
}
