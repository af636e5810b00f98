//! SeaORM entities for the kitchen POS schema.
//!
//! Each module maps one table created by the `migration` crate. Use `prelude` for
//! the entity type aliases.

pub mod prelude;

pub mod menu;
pub mod menu_group;
pub mod menu_product;
pub mod order;
pub mod order_line_item;
pub mod order_table;
pub mod product;
pub mod table_group;
