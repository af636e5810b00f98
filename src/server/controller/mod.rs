//! HTTP request handlers.
//!
//! Controllers convert request DTOs into parameter models, call the service layer and
//! convert the resulting domain models back into DTOs. Every handler is annotated with
//! `#[utoipa::path]` and registered through `OpenApiRouter` in `router`.

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod product;
pub mod table;
pub mod table_group;

#[cfg(test)]
mod test;
