//! Product factory for creating test product entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default price of a test product.
pub const DEFAULT_PRICE: i64 = 16_000;

/// Factory for creating test products with customizable name and price.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i64,
}

impl<'a> ProductFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Product {}", next_id()),
            price: DEFAULT_PRICE,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price in the smallest currency unit.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product priced at `DEFAULT_PRICE`.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
