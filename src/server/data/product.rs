//! Product data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::product::{CreateProductParam, Product};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new product
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, DbErr> {
        let model = entity::product::ActiveModel {
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(model))
    }

    /// Gets all products in insertion order
    pub async fn find_all(&self) -> Result<Vec<Product>, DbErr> {
        let products = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    /// Gets the products matching any of the provided IDs
    ///
    /// IDs without a matching product are skipped, so callers compare the result length
    /// against the requested IDs to detect missing products.
    pub async fn find_all_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let products = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }
}
