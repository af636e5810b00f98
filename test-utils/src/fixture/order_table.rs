//! Order table fixtures for creating in-memory test data.

use entity::order_table;

/// Default number of guests seated at a test table.
pub const DEFAULT_NUMBER_OF_GUESTS: i32 = 0;

/// Test tables start empty.
pub const DEFAULT_EMPTY: bool = true;

/// Creates an order table entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - table_group_id: `None`
/// - number_of_guests: `0`
/// - empty: `true`
///
/// # Example
///
/// ```rust,ignore
/// let table = fixture::order_table::entity();
/// assert!(table.empty);
/// ```
pub fn entity() -> order_table::Model {
    entity_builder().build()
}

/// Creates an order table entity builder for customization.
pub fn entity_builder() -> OrderTableEntityBuilder {
    OrderTableEntityBuilder::default()
}

/// Builder for creating customized order table entity models.
pub struct OrderTableEntityBuilder {
    id: i32,
    table_group_id: Option<i32>,
    number_of_guests: i32,
    empty: bool,
}

impl Default for OrderTableEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            table_group_id: None,
            number_of_guests: DEFAULT_NUMBER_OF_GUESTS,
            empty: DEFAULT_EMPTY,
        }
    }
}

impl OrderTableEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn table_group_id(mut self, table_group_id: Option<i32>) -> Self {
        self.table_group_id = table_group_id;
        self
    }

    pub fn number_of_guests(mut self, number_of_guests: i32) -> Self {
        self.number_of_guests = number_of_guests;
        self
    }

    pub fn empty(mut self, empty: bool) -> Self {
        self.empty = empty;
        self
    }

    /// Builds the order table entity model.
    ///
    /// # Returns
    /// - `order_table::Model` - In-memory order table entity with configured values
    pub fn build(self) -> order_table::Model {
        order_table::Model {
            id: self.id,
            table_group_id: self.table_group_id,
            number_of_guests: self.number_of_guests,
            empty: self.empty,
        }
    }
}
