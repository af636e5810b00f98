//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the menu, order and table rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Every mutating operation runs in a single transaction
//!
//! A failed rule returns early, dropping the open transaction and rolling it back.

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod product;
pub mod table;
pub mod table_group;
