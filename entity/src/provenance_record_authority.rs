use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "provenance_record_authority")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub provenance_record_id: i32,
    #[sea_orm(primary_key)]
    pub organization_id: i32,
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
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
}

impl ActiveModelBehavior for ActiveModel {}
