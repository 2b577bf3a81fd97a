use crate::evidence_type::EvidenceType;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "evidence_reference")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub href: String,
    pub evidence: EvidenceType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
