use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub menu_group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_group::Entity",
        from = "Column::MenuGroupId",
        to = "super::menu_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MenuGroup,
    #[sea_orm(has_many = "super::menu_product::Entity")]
    MenuProduct,
    #[sea_orm(has_many = "super::order_line_item::Entity")]
    OrderLineItem,
}

impl Related<super::menu_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuGroup.def()
    }
}

impl Related<super::menu_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuProduct.def()
    }
}

impl Related<super::order_line_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLineItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
