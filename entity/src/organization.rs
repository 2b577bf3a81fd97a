use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// An organization acting on an item, as a submitter or an authority.
///
/// Rows are not shared: the action date and description belong to one appearance.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organization")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub system_id: String,
    pub name: String,
    pub action_date: OffsetDateTime,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::provenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        super::provenance_record_authority::Relation::ProvenanceRecord.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::provenance_record_authority::Relation::Organization
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
