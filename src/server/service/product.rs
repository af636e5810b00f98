use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::{menu::ProductError, AppError},
    model::product::{CreateProductParam, Product},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new product
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product
    /// - `Err(AppError::ProductErr(InvalidPrice))` - Price is negative
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, AppError> {
        if param.price < 0 {
            return Err(ProductError::InvalidPrice.into());
        }

        let product = ProductRepository::new(self.db).create(param).await?;

        tracing::info!(product_id = product.id, "Created product");

        Ok(product)
    }

    /// Gets all products in insertion order
    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).find_all().await?)
    }
}
