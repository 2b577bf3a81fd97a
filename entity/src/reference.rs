use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reference")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cpe_item_id: i32,
    pub href: String,
    /// The text of the reference
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cpe_item::Entity",
        from = "Column::CpeItemId",
        to = "super::cpe_item::Column::Id"
    )]
    CpeItem,
}

impl Related<super::cpe_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CpeItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
