use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_table_id: i32,
    /// One of `COOKING`, `MEAL` or `COMPLETION`
    pub order_status: String,
    pub ordered_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_table::Entity",
        from = "Column::OrderTableId",
        to = "super::order_table::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    OrderTable,
    #[sea_orm(has_many = "super::order_line_item::Entity")]
    OrderLineItem,
}

impl Related<super::order_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderTable.def()
    }
}

impl Related<super::order_line_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLineItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
