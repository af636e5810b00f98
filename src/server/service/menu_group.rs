use sea_orm::DatabaseConnection;

use crate::server::{
    data::menu_group::MenuGroupRepository,
    error::AppError,
    model::menu_group::{CreateMenuGroupParam, MenuGroup},
};

pub struct MenuGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new menu group
    pub async fn create(&self, param: CreateMenuGroupParam) -> Result<MenuGroup, AppError> {
        let menu_group = MenuGroupRepository::new(self.db).create(param).await?;

        tracing::info!(menu_group_id = menu_group.id, "Created menu group");

        Ok(menu_group)
    }

    /// Gets all menu groups in insertion order
    pub async fn list(&self) -> Result<Vec<MenuGroup>, AppError> {
        Ok(MenuGroupRepository::new(self.db).find_all().await?)
    }
}
