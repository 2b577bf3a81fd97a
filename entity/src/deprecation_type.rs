use crate::code::{parse_code, UnknownCode};
use sea_orm::{DeriveActiveEnum, EnumIter};
use std::fmt;
use std::str::FromStr;

/// The reason a CPE Name got deprecated by another one.
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
pub enum DeprecationType {
    #[sea_orm(num_value = 1)]
    NameCorrection,
    #[sea_orm(num_value = 2)]
    NameRemoval,
    #[sea_orm(num_value = 3)]
    AdditionalInformation,
}

impl DeprecationType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NameCorrection => "Name correction",
            Self::NameRemoval => "Name removal",
            Self::AdditionalInformation => "Additional information",
        }
    }
}

impl FromStr for DeprecationType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code("deprecation type", s)
    }
}

impl fmt::Display for DeprecationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use sea_orm::ActiveEnum;

    #[rstest]
    #[case("NAME_CORRECTION", DeprecationType::NameCorrection)]
    #[case("NameCorrection", DeprecationType::NameCorrection)]
    #[case("name-removal", DeprecationType::NameRemoval)]
    #[case("ADDITIONAL_INFORMATION", DeprecationType::AdditionalInformation)]
    #[test_log::test]
    fn parse(#[case] token: &str, #[case] expected: DeprecationType) {
        assert_eq!(token.parse::<DeprecationType>(), Ok(expected));
    }

    #[test_log::test]
    fn codes() {
        assert_eq!(DeprecationType::NameCorrection.to_value(), 1);
        assert_eq!(DeprecationType::NameRemoval.to_value(), 2);
        assert_eq!(DeprecationType::AdditionalInformation.to_value(), 3);
        assert_eq!(
            DeprecationType::AdditionalInformation.to_string(),
            "ADDITIONAL_INFORMATION"
        );
    }

    #[test_log::test]
    fn unknown() {
        assert_eq!(
            "NAME_CHANGE".parse::<DeprecationType>(),
            Err(UnknownCode {
                kind: "deprecation type",
                token: "NAME_CHANGE".into(),
            })
        );
    }
}
