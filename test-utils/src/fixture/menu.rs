//! Menu fixtures for creating in-memory test data.

use entity::menu;

/// Default test menu name.
pub const DEFAULT_NAME: &str = "Fried Chicken";

/// Default test menu price.
pub const DEFAULT_PRICE: i64 = 16_000;

/// Creates a menu entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Fried Chicken"`
/// - price: `16000`
/// - menu_group_id: `1`
pub fn entity() -> menu::Model {
    menu::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        price: DEFAULT_PRICE,
        menu_group_id: 1,
    }
}
