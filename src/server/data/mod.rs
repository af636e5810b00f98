//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so services can run them either on the
//! pooled `DatabaseConnection` or inside a `DatabaseTransaction`.

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod product;
pub mod table_group;

#[cfg(test)]
mod test;
