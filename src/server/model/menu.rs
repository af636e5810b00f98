//! Domain & parameter models for menu operations
//!
//! A menu belongs to a menu group and is composed of one or more products, each with a
//! quantity. The menu's own price may not exceed the summed price of its products.

use crate::model::menu::{CreateMenuDto, MenuDto, MenuProductDto};

/// The menu domain model with its menu products
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub menu_group_id: i32,
    pub menu_products: Vec<MenuProduct>,
}

impl Menu {
    /// Converts a menu entity and its menu product entities to the domain model
    ///
    /// # Arguments
    /// - `entity` - The menu entity model
    /// - `menu_products` - Menu product entity models belonging to the menu
    pub fn from_entity(
        entity: entity::menu::Model,
        menu_products: Vec<entity::menu_product::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            menu_group_id: entity.menu_group_id,
            menu_products: menu_products
                .into_iter()
                .map(MenuProduct::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> MenuDto {
        MenuDto {
            id: self.id,
            name: self.name,
            price: self.price,
            menu_group_id: self.menu_group_id,
            menu_products: self
                .menu_products
                .into_iter()
                .map(MenuProduct::into_dto)
                .collect(),
        }
    }
}

/// A product and its quantity within a menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuProduct {
    pub seq: i32,
    pub menu_id: i32,
    pub product_id: i32,
    pub quantity: i64,
}

impl MenuProduct {
    pub fn from_entity(entity: entity::menu_product::Model) -> Self {
        Self {
            seq: entity.seq,
            menu_id: entity.menu_id,
            product_id: entity.product_id,
            quantity: entity.quantity,
        }
    }

    pub fn into_dto(self) -> MenuProductDto {
        MenuProductDto {
            seq: self.seq,
            menu_id: self.menu_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}

/// Parameters for one product of a new menu
#[derive(Debug, Clone)]
pub struct CreateMenuProductParam {
    pub product_id: i32,
    pub quantity: i64,
}

/// Parameters for creating a new menu
#[derive(Debug, Clone)]
pub struct CreateMenuParam {
    pub name: String,
    pub price: i64,
    pub menu_group_id: i32,
    pub menu_products: Vec<CreateMenuProductParam>,
}

impl From<CreateMenuDto> for CreateMenuParam {
    fn from(dto: CreateMenuDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            menu_group_id: dto.menu_group_id,
            menu_products: dto
                .menu_products
                .into_iter()
                .map(|p| CreateMenuProductParam {
                    product_id: p.product_id,
                    quantity: p.quantity,
                })
                .collect(),
        }
    }
}
