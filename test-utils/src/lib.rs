//! Kitchen POS Test Utils
//!
//! Shared testing utilities for the kitchen POS backend. Provides a builder for test
//! contexts backed by in-memory SQLite databases, factories that insert entities with
//! defaults and fixtures that build entity models without touching the database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn places_order() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_kitchen_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
