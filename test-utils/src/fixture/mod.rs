//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests and serve as the default
//! values of the factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let table = fixture::order_table::entity();
//!
//! let grouped = fixture::order_table::entity_builder()
//!     .table_group_id(Some(3))
//!     .empty(false)
//!     .build();
//! ```

pub mod menu;
pub mod order;
pub mod order_table;

pub use menu::entity as menu_entity;
pub use order::{entity as order_entity, entity_builder as order_entity_builder};
pub use order_table::{entity as order_table_entity, entity_builder as order_table_entity_builder};
