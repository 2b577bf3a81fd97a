use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "generator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub cpe_list_id: i32,
    pub product_name: String,
    pub product_version: String,
    /// A decimal with at most two integer and two fractional digits, e.g. `2.3`
    pub schema_version: String,
    pub timestamp: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cpe_list::Entity",
        from = "Column::CpeListId",
        to = "super::cpe_list::Column::Id"
    )]
    CpeList,
}

impl Related<super::cpe_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CpeList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
