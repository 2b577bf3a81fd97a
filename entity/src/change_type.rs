use crate::code::{parse_code, UnknownCode};
use sea_orm::{DeriveActiveEnum, EnumIter};
use std::fmt;
use std::str::FromStr;

/// The kind of change a provenance record describes.
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
pub enum ChangeType {
    #[sea_orm(num_value = 1)]
    OriginalRecord,
    #[sea_orm(num_value = 2)]
    AuthorityChange,
    #[sea_orm(num_value = 3)]
    Deprecation,
    #[sea_orm(num_value = 4)]
    DeprecationModification,
}

impl ChangeType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OriginalRecord => "Original record",
            Self::AuthorityChange => "Authority change",
            Self::Deprecation => "Deprecation",
            Self::DeprecationModification => "Deprecation modification",
        }
    }
}

impl FromStr for ChangeType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code("change type", s)
    }
}

impl fmt::Display for ChangeType {
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
    #[case("ORIGINAL_RECORD", ChangeType::OriginalRecord, 1)]
    #[case("AUTHORITY_CHANGE", ChangeType::AuthorityChange, 2)]
    #[case("DEPRECATION", ChangeType::Deprecation, 3)]
    #[case("DEPRECATION_MODIFICATION", ChangeType::DeprecationModification, 4)]
    #[test_log::test]
    fn tokens_and_codes(#[case] token: &str, #[case] expected: ChangeType, #[case] code: i32) {
        assert_eq!(token.parse::<ChangeType>(), Ok(expected));
        assert_eq!(expected.to_string(), token);
        assert_eq!(expected.to_value(), code);
    }

    #[test_log::test]
    fn unknown() {
        assert!("DELETION".parse::<ChangeType>().is_err());
        assert!("".parse::<ChangeType>().is_err());
    }
}
