//! Menu group factory for creating test menu group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu groups.
///
/// # Example
///
/// ```rust,ignore
/// let group = MenuGroupFactory::new(&db).name("Set Menus").build().await?;
/// ```
pub struct MenuGroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> MenuGroupFactory<'a> {
    /// Creates a new factory with a unique default name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Menu Group {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the menu group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::menu_group::Model)` - Created menu group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu_group::Model, DbErr> {
        entity::menu_group::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu group with default values.
///
/// Shorthand for `MenuGroupFactory::new(db).build().await`.
pub async fn create_menu_group(
    db: &DatabaseConnection,
) -> Result<entity::menu_group::Model, DbErr> {
    MenuGroupFactory::new(db).build().await
}
