//! Domain models and operation parameter types.
//!
//! Domain models are built from SeaORM entity models in the data layer (`from_entity`)
//! and converted into DTOs at the controller boundary (`into_dto`). Parameter models
//! carry validated-at-the-boundary request data into the service layer.

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod product;
pub mod table;
pub mod table_group;
