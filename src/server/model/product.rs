//! Domain & parameter models for product operations

use crate::model::product::{CreateProductDto, ProductDto};

/// The product domain model
///
/// Prices are amounts in the smallest currency unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i64,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            price: self.price,
        }
    }
}

/// Parameters for creating a new product
#[derive(Debug, Clone)]
pub struct CreateProductParam {
    pub name: String,
    pub price: i64,
}

impl From<CreateProductDto> for CreateProductParam {
    fn from(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
        }
    }
}
