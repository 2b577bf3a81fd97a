use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cpe_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name_id: i32,
    pub deprecated: bool,
    pub deprecated_by_id: Option<i32>,
    pub deprecation_date: Option<OffsetDateTime>,
    pub cpe_list_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cpe_name::Entity",
        from = "Column::NameId",
        to = "super::cpe_name::Column::Id"
    )]
    Name,
    #[sea_orm(
        belongs_to = "super::cpe_name::Entity",
        from = "Column::DeprecatedById",
        to = "super::cpe_name::Column::Id"
    )]
    DeprecatedBy,
    #[sea_orm(
        belongs_to = "super::cpe_list::Entity",
        from = "Column::CpeListId",
        to = "super::cpe_list::Column::Id"
    )]
    CpeList,
    #[sea_orm(has_many = "super::title::Entity")]
    Title,
    #[sea_orm(has_many = "super::note::Entity")]
    Note,
    #[sea_orm(has_many = "super::reference::Entity")]
    Reference,
    #[sea_orm(has_many = "super::check::Entity")]
    Check,
    #[sea_orm(has_many = "super::deprecation::Entity")]
    Deprecation,
    #[sea_orm(has_one = "super::provenance_record::Entity")]
    ProvenanceRecord,
}

impl Related<super::cpe_name::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Name.def()
    }
}

impl Related<super::cpe_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CpeList.def()
    }
}

impl Related<super::title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Title.def()
    }
}

impl Related<super::note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Note.def()
    }
}

impl Related<super::reference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reference.def()
    }
}

impl Related<super::check::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Check.def()
    }
}

impl Related<super::deprecation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deprecation.def()
    }
}

impl Related<super::provenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProvenanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
