use cpedict_common::cpe::{Attribute, CpeNameError, Wfn, WfnValue};
use sea_orm::{entity::prelude::*, Set};

/// A CPE Name, stored as its 11 WFN attributes.
///
/// Each column holds the storage form of the value: `ANY`, `NA` or the quoted WFN value. The
/// whole tuple is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cpe_name")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub part: String,
    pub vendor: String,
    pub product: String,
    pub version: String,
    pub update: String,
    pub edition: String,
    pub sw_edition: String,
    pub target_sw: String,
    pub target_hw: String,
    pub other: String,
    pub language: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::cpe_item::Entity> for Entity {
    fn to() -> RelationDef {
        super::cpe_item::Relation::Name.def().rev()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    fn stored(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Part => &self.part,
            Attribute::Vendor => &self.vendor,
            Attribute::Product => &self.product,
            Attribute::Version => &self.version,
            Attribute::Update => &self.update,
            Attribute::Edition => &self.edition,
            Attribute::Language => &self.language,
            Attribute::SwEdition => &self.sw_edition,
            Attribute::TargetSw => &self.target_sw,
            Attribute::TargetHw => &self.target_hw,
            Attribute::Other => &self.other,
        }
    }

    /// Reconstruct the WFN, validating the stored values.
    pub fn to_wfn(&self) -> Result<Wfn, CpeNameError> {
        let mut wfn = Wfn::default();
        for attribute in Attribute::ALL {
            *wfn.get_mut(attribute) = WfnValue::from_stored(self.stored(attribute))?;
        }
        wfn.validate()?;
        Ok(wfn)
    }
}

impl ActiveModel {
    pub fn from_wfn(wfn: &Wfn) -> Self {
        Self {
            id: Default::default(),
            part: Set(wfn.part.to_stored()),
            vendor: Set(wfn.vendor.to_stored()),
            product: Set(wfn.product.to_stored()),
            version: Set(wfn.version.to_stored()),
            update: Set(wfn.update.to_stored()),
            edition: Set(wfn.edition.to_stored()),
            sw_edition: Set(wfn.sw_edition.to_stored()),
            target_sw: Set(wfn.target_sw.to_stored()),
            target_hw: Set(wfn.target_hw.to_stored()),
            other: Set(wfn.other.to_stored()),
            language: Set(wfn.language.to_stored()),
        }
    }
}

impl From<&Wfn> for ActiveModel {
    fn from(value: &Wfn) -> Self {
        Self::from_wfn(value)
    }
}
