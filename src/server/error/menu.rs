use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum MenuError {
    /// Menu price is negative.
    #[error("Menu price must be zero or greater.")]
    InvalidPrice,

    /// A menu product has a negative quantity.
    #[error("Quantity of product {0} must be zero or greater.")]
    InvalidQuantity(i32),

    /// Referenced menu group does not exist.
    #[error("Menu group {0} does not exist; the menu cannot be registered.")]
    MenuGroupNotFound(i32),

    /// One of the menu products references a product that does not exist.
    #[error("Product {0} does not exist; the menu cannot be registered.")]
    ProductNotFound(i32),

    /// Menu price is higher than the summed price of its products.
    #[error("Menu price {price} exceeds the total price of its products ({total}).")]
    PriceExceedsProducts {
        /// Requested menu price
        price: i64,
        /// Sum of product price times quantity
        total: i64,
    },
}

/// Converts menu errors into HTTP responses.
///
/// - `MenuGroupNotFound` / `ProductNotFound` → 404 Not Found
/// - `InvalidPrice` / `InvalidQuantity` / `PriceExceedsProducts` → 400 Bad Request
impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MenuGroupNotFound(_) | Self::ProductNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidPrice | Self::InvalidQuantity(_) | Self::PriceExceedsProducts { .. } => {
                StatusCode::BAD_REQUEST
            }
        };

        error_response(status, self.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ProductError {
    /// Product price is negative.
    #[error("Product price must be zero or greater.")]
    InvalidPrice,
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
