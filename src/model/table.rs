use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderTableDto {
    #[serde(default)]
    pub number_of_guests: i32,
    #[serde(default)]
    pub empty: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChangeEmptyDto {
    pub empty: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChangeNumberOfGuestsDto {
    pub number_of_guests: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderTableDto {
    pub id: i32,
    pub table_group_id: Option<i32>,
    pub number_of_guests: i32,
    pub empty: bool,
}
