//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let menu_group = factory::create_menu_group(&db).await?;
//!     let menu = factory::create_menu(&db, menu_group.id).await?;
//!
//!     let table = factory::order_table::OrderTableFactory::new(&db)
//!         .empty(false)
//!         .number_of_guests(4)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `menu_group` - Create menu group entities
//! - `product` - Create product entities
//! - `menu` - Create menu and menu product entities
//! - `table_group` - Create table group entities
//! - `order_table` - Create order table entities
//! - `order` - Create order and order line item entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod product;
pub mod table_group;

pub use menu::{create_menu, create_menu_product};
pub use menu_group::create_menu_group;
pub use order::{create_order, create_order_line_item};
pub use order_table::{create_occupied_table, create_order_table};
pub use product::create_product;
pub use table_group::create_table_group;
