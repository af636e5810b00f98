//! Request and response DTOs exchanged over the HTTP API.
//!
//! DTOs are plain serde types with `ToSchema` derives for the OpenAPI document. The
//! server converts them into domain parameter models before calling the service layer.

pub mod api;
pub mod menu;
pub mod menu_group;
pub mod order;
pub mod product;
pub mod table;
pub mod table_group;
