//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a menu together with its catalog dependencies.
///
/// This creates, with default values:
/// 1. Menu group
/// 2. Product
/// 3. Menu in that group, priced at the product price
/// 4. Menu product linking the menu to one unit of the product
///
/// # Returns
/// - `Ok((menu_group, product, menu, menu_product))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_menu_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::menu_group::Model,
        entity::product::Model,
        entity::menu::Model,
        entity::menu_product::Model,
    ),
    DbErr,
> {
    let menu_group = crate::factory::menu_group::create_menu_group(db).await?;
    let product = crate::factory::product::create_product(db).await?;
    let menu = crate::factory::menu::MenuFactory::new(db, menu_group.id)
        .price(product.price)
        .build()
        .await?;
    let menu_product =
        crate::factory::menu::create_menu_product(db, menu.id, product.id, 1).await?;

    Ok((menu_group, product, menu, menu_product))
}

/// Creates an order on an occupied table, ordering one unit of a new menu.
///
/// # Returns
/// - `Ok((order_table, menu, order))` - Tuple of the table, the ordered menu and the order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::order_table::Model,
        entity::menu::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let (_, _, menu, _) = create_menu_with_dependencies(db).await?;
    let order_table = crate::factory::order_table::create_occupied_table(db).await?;
    let order = crate::factory::order::create_order(db, order_table.id).await?;
    crate::factory::order::create_order_line_item(db, order.id, &menu, 1).await?;

    Ok((order_table, menu, order))
}
