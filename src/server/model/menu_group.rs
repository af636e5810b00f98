//! Domain & parameter models for menu group operations

use crate::model::menu_group::{CreateMenuGroupDto, MenuGroupDto};

/// The menu group domain model
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    pub id: i32,
    pub name: String,
}

impl MenuGroup {
    /// Converts an entity model to the menu group domain model
    pub fn from_entity(entity: entity::menu_group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> MenuGroupDto {
        MenuGroupDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a new menu group
#[derive(Debug, Clone)]
pub struct CreateMenuGroupParam {
    pub name: String,
}

impl From<CreateMenuGroupDto> for CreateMenuGroupParam {
    fn from(dto: CreateMenuGroupDto) -> Self {
        Self { name: dto.name }
    }
}
