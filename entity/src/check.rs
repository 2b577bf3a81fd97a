use sea_orm::entity::prelude::*;

/// A check for the presence of a platform, in a given check system.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "check")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cpe_item_id: i32,
    pub system: String,
    pub href: Option<String>,
    /// The check identifier, taken from the element text
    pub value: String,
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
