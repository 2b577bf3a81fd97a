use crate::deprecation_type::DeprecationType;
use sea_orm::entity::prelude::*;

/// A CPE Name superseding the deprecated one, and why.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deprecated_by")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub deprecation_id: i32,
    pub name_id: i32,
    pub deprecation_type: DeprecationType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::deprecation::Entity",
        from = "Column::DeprecationId",
        to = "super::deprecation::Column::Id"
    )]
    Deprecation,
    #[sea_orm(
        belongs_to = "super::cpe_name::Entity",
        from = "Column::NameId",
        to = "super::cpe_name::Column::Id"
    )]
    Name,
}

impl Related<super::deprecation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deprecation.def()
    }
}

impl Related<super::cpe_name::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Name.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
