use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMenuProductDto {
    pub product_id: i32,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMenuDto {
    pub name: String,
    pub price: i64,
    pub menu_group_id: i32,
    #[serde(default)]
    pub menu_products: Vec<CreateMenuProductDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MenuProductDto {
    pub seq: i32,
    pub menu_id: i32,
    pub product_id: i32,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MenuDto {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub menu_group_id: i32,
    pub menu_products: Vec<MenuProductDto>,
}
