//! Order fixtures for creating in-memory test data.
//!
//! The status is kept as the raw column value so tests can also build rows the
//! application would refuse to parse.

use chrono::{DateTime, TimeZone, Utc};
use entity::order;

/// Default stored order status.
pub const DEFAULT_ORDER_STATUS: &str = "COOKING";

/// Fixed time used for test orders, 2026-01-01 12:00:00 UTC.
pub fn default_ordered_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates an order entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - order_table_id: `1`
/// - order_status: `"COOKING"`
/// - ordered_time: `2026-01-01 12:00:00 UTC`
pub fn entity() -> order::Model {
    entity_builder().build()
}

/// Creates an order entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let order = fixture::order::entity_builder()
///     .order_status("COMPLETION")
///     .build();
/// ```
pub fn entity_builder() -> OrderEntityBuilder {
    OrderEntityBuilder::default()
}

/// Builder for creating customized order entity models.
pub struct OrderEntityBuilder {
    id: i32,
    order_table_id: i32,
    order_status: String,
    ordered_time: DateTime<Utc>,
}

impl Default for OrderEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            order_table_id: 1,
            order_status: DEFAULT_ORDER_STATUS.to_string(),
            ordered_time: default_ordered_time(),
        }
    }
}

impl OrderEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn order_table_id(mut self, order_table_id: i32) -> Self {
        self.order_table_id = order_table_id;
        self
    }

    /// Sets the raw stored status, e.g. `"MEAL"`.
    pub fn order_status(mut self, order_status: impl Into<String>) -> Self {
        self.order_status = order_status.into();
        self
    }

    pub fn ordered_time(mut self, ordered_time: DateTime<Utc>) -> Self {
        self.ordered_time = ordered_time;
        self
    }

    pub fn build(self) -> order::Model {
        order::Model {
            id: self.id,
            order_table_id: self.order_table_id,
            order_status: self.order_status,
            ordered_time: self.ordered_time,
        }
    }
}
