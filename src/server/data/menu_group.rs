//! Menu group data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::menu_group::{CreateMenuGroupParam, MenuGroup};

pub struct MenuGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new menu group
    pub async fn create(&self, param: CreateMenuGroupParam) -> Result<MenuGroup, DbErr> {
        let model = entity::menu_group::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MenuGroup::from_entity(model))
    }

    /// Gets all menu groups in insertion order
    pub async fn find_all(&self) -> Result<Vec<MenuGroup>, DbErr> {
        let groups = entity::prelude::MenuGroup::find()
            .order_by_asc(entity::menu_group::Column::Id)
            .all(self.db)
            .await?;

        Ok(groups.into_iter().map(MenuGroup::from_entity).collect())
    }

    /// Checks whether a menu group with the provided ID exists
    pub async fn exists_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MenuGroup::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
