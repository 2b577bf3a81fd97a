use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deprecation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cpe_item_id: i32,
    pub date: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cpe_item::Entity",
        from = "Column::CpeItemId",
        to = "super::cpe_item::Column::Id"
    )]
    CpeItem,
    #[sea_orm(has_many = "super::deprecated_by::Entity")]
    DeprecatedBy,
}

impl Related<super::cpe_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CpeItem.def()
    }
}

impl Related<super::deprecated_by::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeprecatedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
