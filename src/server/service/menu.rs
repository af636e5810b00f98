use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{menu::MenuRepository, menu_group::MenuGroupRepository, product::ProductRepository},
    error::{menu::MenuError, AppError},
    model::menu::{CreateMenuParam, Menu},
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new menu composed of existing products
    ///
    /// # Arguments
    /// - `param` - Menu name, price, group and products with quantities
    ///
    /// # Returns
    /// - `Ok(Menu)` - The created menu with its menu products
    /// - `Err(AppError::MenuErr(InvalidPrice))` - Price is negative
    /// - `Err(AppError::MenuErr(InvalidQuantity))` - A product quantity is negative
    /// - `Err(AppError::MenuErr(MenuGroupNotFound))` - Menu group does not exist
    /// - `Err(AppError::MenuErr(ProductNotFound))` - A referenced product does not exist
    /// - `Err(AppError::MenuErr(PriceExceedsProducts))` - Price is higher than the
    ///   summed product prices
    pub async fn create(&self, param: CreateMenuParam) -> Result<Menu, AppError> {
        if param.price < 0 {
            return Err(MenuError::InvalidPrice.into());
        }

        if let Some(menu_product) = param.menu_products.iter().find(|p| p.quantity < 0) {
            return Err(MenuError::InvalidQuantity(menu_product.product_id).into());
        }

        let txn = self.db.begin().await?;

        if !MenuGroupRepository::new(&txn)
            .exists_by_id(param.menu_group_id)
            .await?
        {
            return Err(MenuError::MenuGroupNotFound(param.menu_group_id).into());
        }

        let product_ids: Vec<i32> = param.menu_products.iter().map(|p| p.product_id).collect();
        let prices: HashMap<i32, i64> = ProductRepository::new(&txn)
            .find_all_by_ids(&product_ids)
            .await?
            .into_iter()
            .map(|product| (product.id, product.price))
            .collect();

        let mut total: i64 = 0;
        for menu_product in &param.menu_products {
            let price = prices
                .get(&menu_product.product_id)
                .ok_or(MenuError::ProductNotFound(menu_product.product_id))?;
            total = total.saturating_add(price.saturating_mul(menu_product.quantity));
        }

        if param.price > total {
            return Err(MenuError::PriceExceedsProducts {
                price: param.price,
                total,
            }
            .into());
        }

        let menu = MenuRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!(menu_id = menu.id, "Created menu");

        Ok(menu)
    }

    /// Gets all menus in insertion order with their menu products
    pub async fn list(&self) -> Result<Vec<Menu>, AppError> {
        Ok(MenuRepository::new(self.db).find_all().await?)
    }
}
