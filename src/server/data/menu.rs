//! Menu data repository for database operations
//!
//! Menus are always loaded together with their menu products. Menu products are fetched
//! in a single query per call and grouped by menu ID.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::menu::{CreateMenuParam, Menu};

pub struct MenuRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new menu along with its menu products
    ///
    /// # Arguments
    /// - `param` - Menu data, already validated by the service layer
    ///
    /// # Returns
    /// - `Ok(Menu)` - The created menu with its menu products
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMenuParam) -> Result<Menu, DbErr> {
        let menu = entity::menu::ActiveModel {
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            menu_group_id: ActiveValue::Set(param.menu_group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut menu_products = Vec::with_capacity(param.menu_products.len());
        for menu_product in param.menu_products {
            let model = entity::menu_product::ActiveModel {
                menu_id: ActiveValue::Set(menu.id),
                product_id: ActiveValue::Set(menu_product.product_id),
                quantity: ActiveValue::Set(menu_product.quantity),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            menu_products.push(model);
        }

        Ok(Menu::from_entity(menu, menu_products))
    }

    /// Gets all menus in insertion order with their menu products
    pub async fn find_all(&self) -> Result<Vec<Menu>, DbErr> {
        let menus = entity::prelude::Menu::find()
            .order_by_asc(entity::menu::Column::Id)
            .all(self.db)
            .await?;

        self.with_menu_products(menus).await
    }

    /// Gets the menus matching any of the provided IDs
    ///
    /// IDs without a matching menu are skipped.
    pub async fn find_all_by_ids(&self, ids: &[i32]) -> Result<Vec<Menu>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let menus = entity::prelude::Menu::find()
            .filter(entity::menu::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::menu::Column::Id)
            .all(self.db)
            .await?;

        self.with_menu_products(menus).await
    }

    async fn with_menu_products(
        &self,
        menus: Vec<entity::menu::Model>,
    ) -> Result<Vec<Menu>, DbErr> {
        if menus.is_empty() {
            return Ok(Vec::new());
        }

        let menu_ids: Vec<i32> = menus.iter().map(|m| m.id).collect();
        let mut products_by_menu: HashMap<i32, Vec<entity::menu_product::Model>> =
            HashMap::new();
        for menu_product in entity::prelude::MenuProduct::find()
            .filter(entity::menu_product::Column::MenuId.is_in(menu_ids))
            .order_by_asc(entity::menu_product::Column::Seq)
            .all(self.db)
            .await?
        {
            products_by_menu
                .entry(menu_product.menu_id)
                .or_default()
                .push(menu_product);
        }

        Ok(menus
            .into_iter()
            .map(|menu| {
                let menu_products = products_by_menu.remove(&menu.id).unwrap_or_default();
                Menu::from_entity(menu, menu_products)
            })
            .collect())
    }
}
