use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "provenance_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub cpe_item_id: i32,
    pub submitter_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cpe_item::Entity",
        from = "Column::CpeItemId",
        to = "super::cpe_item::Column::Id"
    )]
    CpeItem,
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::SubmitterId",
        to = "super::organization::Column::Id"
    )]
    Submitter,
    #[sea_orm(has_many = "super::change_description::Entity")]
    ChangeDescription,
}

impl Related<super::cpe_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CpeItem.def()
    }
}

impl Related<super::change_description::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChangeDescription.def()
    }
}

/// The authorities, through [`super::provenance_record_authority`].
impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        super::provenance_record_authority::Relation::Organization.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::provenance_record_authority::Relation::ProvenanceRecord
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
