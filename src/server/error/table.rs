use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum TableError {
    /// Order table does not exist.
    #[error("Order table does not exist.")]
    OrderTableNotFound,

    /// Grouped tables cannot change their empty state.
    #[error("Order table {0} belongs to a table group; its empty state cannot be changed.")]
    GroupedTable(i32),

    /// Table has an order that is still cooking or being eaten.
    #[error("Order table {0} has an order in COOKING or MEAL status; its empty state cannot be changed.")]
    OrderInProgress(i32),

    /// Requested number of guests is negative.
    #[error("Number of guests must be zero or greater.")]
    InvalidNumberOfGuests,

    /// Guests cannot be registered on an empty table.
    #[error("Order table {0} is empty; the number of guests cannot be changed.")]
    EmptyTable(i32),
}

/// Converts table errors into HTTP responses.
///
/// - `OrderTableNotFound` → 404 Not Found
/// - every other variant → 400 Bad Request
impl IntoResponse for TableError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::OrderTableNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}

#[derive(Error, Debug)]
pub enum TableGroupError {
    /// Table group request has fewer than the minimum number of tables.
    #[error("A table group requires at least {0} order tables.")]
    NotEnoughTables(usize),

    /// One of the requested tables does not exist.
    #[error("One or more order tables do not exist; the table group cannot be created.")]
    OrderTableNotFound,

    /// One of the requested tables is occupied or already grouped.
    #[error("Order table {0} is not empty or already belongs to a table group.")]
    TableNotAvailable(i32),

    /// Table group does not exist.
    #[error("Table group does not exist.")]
    TableGroupNotFound,

    /// A member table has an order that is still cooking or being eaten.
    #[error("A table in the group has an order in COOKING or MEAL status; the group cannot be ungrouped.")]
    OrderInProgress,
}

/// Converts table group errors into HTTP responses.
///
/// - `TableGroupNotFound` / `OrderTableNotFound` → 404 Not Found
/// - every other variant → 400 Bad Request
impl IntoResponse for TableGroupError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::TableGroupNotFound | Self::OrderTableNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
