use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum OrderError {
    /// Order request carries no line items.
    #[error("Order has no line items; the order cannot be registered.")]
    EmptyLineItems,

    /// A line item orders zero or fewer servings.
    #[error("Quantity of menu {0} must be greater than zero; the order cannot be registered.")]
    InvalidQuantity(i32),

    /// A line item references a menu that does not exist.
    #[error("Order line items reference a menu that does not exist; the order cannot be registered.")]
    MenuNotFound,

    /// Referenced order table does not exist.
    #[error("Order table does not exist; the order cannot be registered.")]
    OrderTableNotFound,

    /// Orders cannot be placed on an empty table.
    #[error("Order table {0} is empty; the order cannot be registered.")]
    OrderTableEmpty(i32),

    /// Order whose status should change does not exist.
    #[error("Order does not exist; the order status cannot be changed.")]
    OrderNotFound,

    /// Order already reached the terminal `COMPLETION` status.
    #[error("Order is already completed; the order status cannot be changed.")]
    AlreadyCompleted,
}

/// Converts order errors into HTTP responses.
///
/// - `OrderNotFound` / `MenuNotFound` / `OrderTableNotFound` → 404 Not Found
/// - every other variant → 400 Bad Request
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::OrderNotFound | Self::MenuNotFound | Self::OrderTableNotFound => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
