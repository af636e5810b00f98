pub use super::menu::Entity as Menu;
pub use super::menu_group::Entity as MenuGroup;
pub use super::menu_product::Entity as MenuProduct;
pub use super::order::Entity as Order;
pub use super::order_line_item::Entity as OrderLineItem;
pub use super::order_table::Entity as OrderTable;
pub use super::product::Entity as Product;
pub use super::table_group::Entity as TableGroup;
