use sea_orm::entity::prelude::*;

/// One imported dictionary document.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cpe_list")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::generator::Entity")]
    Generator,
    #[sea_orm(has_many = "super::cpe_item::Entity")]
    CpeItem,
}

impl Related<super::generator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Generator.def()
    }
}

impl Related<super::cpe_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CpeItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
