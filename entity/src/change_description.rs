use crate::change_type::ChangeType;
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "change_description")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub provenance_record_id: i32,
    pub change_type: ChangeType,
    pub date: OffsetDateTime,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub evidence_reference_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::provenance_record::Entity",
        from = "Column::ProvenanceRecordId",
        to = "super::provenance_record::Column::Id"
    )]
    ProvenanceRecord,
    #[sea_orm(
        belongs_to = "super::evidence_reference::Entity",
        from = "Column::EvidenceReferenceId",
        to = "super::evidence_reference::Column::Id"
    )]
    EvidenceReference,
}

impl Related<super::provenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProvenanceRecord.def()
    }
}

impl Related<super::evidence_reference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvidenceReference.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
