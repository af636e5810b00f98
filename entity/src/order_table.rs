use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub table_group_id: Option<i32>,
    pub number_of_guests: i32,
    pub empty: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::table_group::Entity",
        from = "Column::TableGroupId",
        to = "super::table_group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    TableGroup,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::table_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TableGroup.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
