use crate::code::{parse_code, UnknownCode};
use sea_orm::{DeriveActiveEnum, EnumIter};
use std::fmt;
use std::str::FromStr;

/// The kind of evidence backing a change.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    strum::VariantArray,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceType {
    #[sea_orm(num_value = 1)]
    CuratorUpdate,
    #[sea_orm(num_value = 2)]
    VendorFix,
    #[sea_orm(num_value = 3)]
    ThirdPartyFix,
}

impl EvidenceType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CuratorUpdate => "Curator update",
            Self::VendorFix => "Vendor fix",
            Self::ThirdPartyFix => "Third party fix",
        }
    }
}

impl FromStr for EvidenceType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code("evidence type", s)
    }
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn parse_any_spelling() {
        for token in ["THIRD_PARTY_FIX", "ThirdPartyFix", "third-party-fix"] {
            assert_eq!(token.parse::<EvidenceType>(), Ok(EvidenceType::ThirdPartyFix));
        }
    }

    #[test]
    fn label() {
        assert_eq!(EvidenceType::VendorFix.label(), "Vendor fix");
        assert_eq!(EvidenceType::CuratorUpdate.to_string(), "CURATOR_UPDATE");
    }
}
