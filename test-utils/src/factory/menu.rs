//! Menu factory for creating test menu and menu product entities.
//!
//! Menu defaults come from `fixture::menu`, with a unique name per menu.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menus.
///
/// # Example
///
/// ```rust,ignore
/// let menu = MenuFactory::new(&db, menu_group.id)
///     .name("Two Chickens")
///     .price(19_000)
///     .build()
///     .await?;
/// ```
pub struct MenuFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::menu::Model,
}

impl<'a> MenuFactory<'a> {
    /// Creates a new factory for a menu in the given menu group.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `menu_group_id` - Menu group the menu belongs to
    pub fn new(db: &'a DatabaseConnection, menu_group_id: i32) -> Self {
        let mut entity = fixture::menu::entity();
        entity.name = format!("Menu {}", next_id());
        entity.menu_group_id = menu_group_id;

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.entity.price = price;
        self
    }

    /// Builds and inserts the menu entity into the database.
    ///
    /// No menu products are created, use `create_menu_product` for those.
    pub async fn build(self) -> Result<entity::menu::Model, DbErr> {
        entity::menu::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            price: ActiveValue::Set(self.entity.price),
            menu_group_id: ActiveValue::Set(self.entity.menu_group_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu with default values in the given menu group.
pub async fn create_menu(
    db: &DatabaseConnection,
    menu_group_id: i32,
) -> Result<entity::menu::Model, DbErr> {
    MenuFactory::new(db, menu_group_id).build().await
}

/// Links a product to a menu.
///
/// # Arguments
/// - `db` - Database connection
/// - `menu_id` - Menu the product is part of
/// - `product_id` - Product included in the menu
/// - `quantity` - Units of the product in the menu
///
/// # Returns
/// - `Ok(entity::menu_product::Model)` - Created menu product entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_menu_product(
    db: &DatabaseConnection,
    menu_id: i32,
    product_id: i32,
    quantity: i64,
) -> Result<entity::menu_product::Model, DbErr> {
    entity::menu_product::ActiveModel {
        seq: ActiveValue::NotSet,
        menu_id: ActiveValue::Set(menu_id),
        product_id: ActiveValue::Set(product_id),
        quantity: ActiveValue::Set(quantity),
    }
    .insert(db)
    .await
}
