use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::menu_product::Entity")]
    MenuProduct,
}

impl Related<super::menu_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
