//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod internal;
pub mod menu;
pub mod order;
pub mod table;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        internal::InternalError,
        menu::{MenuError, ProductError},
        order::OrderError,
        table::{TableError, TableGroupError},
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain errors (menu, order, table) map
/// themselves to 400 or 404 responses carrying their message, while infrastructure
/// errors always result in a generic 500 response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal state, such as an unparseable stored value.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// IO error, raised when binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Menu registration rule violated.
    #[error(transparent)]
    MenuErr(#[from] MenuError),

    /// Product registration rule violated.
    #[error(transparent)]
    ProductErr(#[from] ProductError),

    /// Order lifecycle rule violated.
    #[error(transparent)]
    OrderErr(#[from] OrderError),

    /// Order table rule violated.
    #[error(transparent)]
    TableErr(#[from] TableError),

    /// Table group rule violated.
    #[error(transparent)]
    TableGroupErr(#[from] TableGroupError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For domain rule violations
/// - 404 Not Found - For domain errors referencing a missing record
/// - 500 Internal Server Error - For all infrastructure errors (DbErr, IoErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::MenuErr(err) => err.into_response(),
            Self::ProductErr(err) => err.into_response(),
            Self::OrderErr(err) => err.into_response(),
            Self::TableErr(err) => err.into_response(),
            Self::TableGroupErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: String) -> Response {
    tracing::debug!(status = %status, "{}", message);

    (status, Json(ErrorDto { error: message })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
