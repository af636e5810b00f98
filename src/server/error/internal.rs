use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored order status does not match any known status
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse order status from stored value '{0}'")]
    ParseOrderStatus(String),

    /// Record could not be read back after it was written in the same transaction
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite {
        /// Name of the entity that was written
        entity: &'static str,
        /// Primary key of the written record
        id: i32,
    },
}
