use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "table_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_table::Entity")]
    OrderTable,
}

impl Related<super::order_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderTable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
