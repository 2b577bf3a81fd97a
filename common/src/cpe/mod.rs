//! CPE Names and the well-formed name (WFN) they bind to.
//!
//! A CPE Name comes in two bindings: the CPE 2.2 URI (`cpe:/a:mozilla:firefox:22`) and the
//! CPE 2.3 formatted string (`cpe:2.3:a:mozilla:firefox:22:*:*:*:*:*:*:*`). Both decode into a
//! [`Wfn`], which is what gets validated, compared and stored.

mod fs;
mod uri;
mod validate;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use validate::validate;

/// The version of a CPE Name binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CpeVersion {
    /// The CPE 2.2 URI binding
    V2_2,
    /// The CPE 2.3 formatted string binding
    V2_3,
}

impl Display for CpeVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V2_2 => f.write_str("2.2"),
            Self::V2_3 => f.write_str("2.3"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CpeNameError {
    #[error("unknown CPE Name binding: {0}")]
    Binding(String),
    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },
    #[error("invalid value for attribute '{attribute}': {value}")]
    InvalidValue {
        attribute: &'static str,
        value: String,
    },
    #[error("not a CPE 2.2 URI: {0}")]
    Uri(String),
    #[error("invalid stored attribute value: {0}")]
    Stored(String),
}

/// The attributes of a WFN, in the order of the 2.3 formatted string binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Part,
    Vendor,
    Product,
    Version,
    Update,
    Edition,
    Language,
    SwEdition,
    TargetSw,
    TargetHw,
    Other,
}

impl Attribute {
    pub const ALL: [Attribute; 11] = [
        Self::Part,
        Self::Vendor,
        Self::Product,
        Self::Version,
        Self::Update,
        Self::Edition,
        Self::Language,
        Self::SwEdition,
        Self::TargetSw,
        Self::TargetHw,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::Vendor => "vendor",
            Self::Product => "product",
            Self::Version => "version",
            Self::Update => "update",
            Self::Edition => "edition",
            Self::SwEdition => "sw_edition",
            Self::TargetSw => "target_sw",
            Self::TargetHw => "target_hw",
            Self::Other => "other",
            Self::Language => "language",
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a single WFN attribute.
///
/// [`WfnValue::Value`] carries the value in WFN form: every character which is not alphanumeric
/// or an underscore is escaped with a backslash, except for the unescaped wildcards `*` and `?`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WfnValue {
    #[default]
    Any,
    Na,
    Value(String),
}

impl WfnValue {
    /// Create a value from a plain, unescaped string.
    pub fn literal(value: &str) -> Self {
        let mut result = String::with_capacity(value.len());
        for c in value.chars() {
            if !(c.is_alphanumeric() || c == '_') {
                result.push('\\');
            }
            result.push(c);
        }
        Self::Value(result)
    }

    /// The form this value is stored in: `ANY`, `NA` or the quoted WFN value.
    pub fn to_stored(&self) -> String {
        match self {
            Self::Any => "ANY".to_string(),
            Self::Na => "NA".to_string(),
            Self::Value(value) => format!("\"{value}\""),
        }
    }

    /// Reverse of [`Self::to_stored`].
    pub fn from_stored(stored: &str) -> Result<Self, CpeNameError> {
        match stored {
            "ANY" => Ok(Self::Any),
            "NA" => Ok(Self::Na),
            _ => stored
                .strip_prefix('"')
                .and_then(|value| value.strip_suffix('"'))
                .filter(|value| !value.is_empty())
                .map(|value| Self::Value(value.to_string()))
                .ok_or_else(|| CpeNameError::Stored(stored.to_string())),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl Display for WfnValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str("ANY"),
            Self::Na => f.write_str("NA"),
            Self::Value(value) => write!(f, "\"{value}\""),
        }
    }
}

/// A well-formed CPE name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wfn {
    pub part: WfnValue,
    pub vendor: WfnValue,
    pub product: WfnValue,
    pub version: WfnValue,
    pub update: WfnValue,
    pub edition: WfnValue,
    pub sw_edition: WfnValue,
    pub target_sw: WfnValue,
    pub target_hw: WfnValue,
    pub other: WfnValue,
    pub language: WfnValue,
}

impl Wfn {
    pub fn get(&self, attribute: Attribute) -> &WfnValue {
        match attribute {
            Attribute::Part => &self.part,
            Attribute::Vendor => &self.vendor,
            Attribute::Product => &self.product,
            Attribute::Version => &self.version,
            Attribute::Update => &self.update,
            Attribute::Edition => &self.edition,
            Attribute::SwEdition => &self.sw_edition,
            Attribute::TargetSw => &self.target_sw,
            Attribute::TargetHw => &self.target_hw,
            Attribute::Other => &self.other,
            Attribute::Language => &self.language,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut WfnValue {
        match attribute {
            Attribute::Part => &mut self.part,
            Attribute::Vendor => &mut self.vendor,
            Attribute::Product => &mut self.product,
            Attribute::Version => &mut self.version,
            Attribute::Update => &mut self.update,
            Attribute::Edition => &mut self.edition,
            Attribute::SwEdition => &mut self.sw_edition,
            Attribute::TargetSw => &mut self.target_sw,
            Attribute::TargetHw => &mut self.target_hw,
            Attribute::Other => &mut self.other,
            Attribute::Language => &mut self.language,
        }
    }

    /// Unbind a name in the given binding, without validating it.
    pub fn parse(name: &str, version: CpeVersion) -> Result<Self, CpeNameError> {
        match version {
            CpeVersion::V2_2 => uri::unbind(name),
            CpeVersion::V2_3 => fs::unbind(name),
        }
    }

    /// Unbind a CPE 2.3 formatted string.
    pub fn from_formatted_string(name: &str) -> Result<Self, CpeNameError> {
        fs::unbind(name)
    }

    /// Unbind a CPE 2.2 URI.
    pub fn from_uri(name: &str) -> Result<Self, CpeNameError> {
        uri::unbind(name)
    }

    /// Detect the binding of a name by its prefix.
    pub fn detect_version(name: &str) -> Result<CpeVersion, CpeNameError> {
        if has_prefix(name, fs::PREFIX) {
            Ok(CpeVersion::V2_3)
        } else if has_prefix(name, uri::PREFIX) {
            Ok(CpeVersion::V2_2)
        } else {
            Err(CpeNameError::Binding(name.to_string()))
        }
    }

    /// Unbind a name in either binding, without validating it.
    pub fn parse_any(name: &str) -> Result<Self, CpeNameError> {
        Self::parse(name, Self::detect_version(name)?)
    }

    /// Unbind, canonicalize and validate a name.
    pub fn from_name(name: &str, version: CpeVersion) -> Result<Self, CpeNameError> {
        let wfn = Self::parse(name, version)?.canonicalize();
        wfn.validate()?;
        Ok(wfn)
    }

    /// Lower-case all values, as WFN comparison is case-insensitive.
    pub fn canonicalize(mut self) -> Self {
        for attribute in Attribute::ALL {
            if let WfnValue::Value(value) = self.get_mut(attribute) {
                *value = value.to_lowercase();
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), CpeNameError> {
        validate(self)
    }

    /// Bind to a CPE 2.3 formatted string.
    pub fn to_formatted_string(&self) -> String {
        fs::bind(self)
    }

    /// Bind to a CPE 2.2 URI.
    pub fn to_uri(&self) -> String {
        uri::bind(self)
    }
}

impl FromStr for Wfn {
    type Err = CpeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, Self::detect_version(s)?)
    }
}

/// Renders the WFN form, omitting attributes which are `ANY`.
impl Display for Wfn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("wfn:[")?;
        let mut first = true;
        for attribute in Attribute::ALL {
            let value = self.get(attribute);
            if value.is_any() {
                continue;
            }
            if !first {
                f.write_str(",")?;
            }
            first = false;
            write!(f, "{attribute}={value}")?;
        }
        f.write_str("]")
    }
}

fn has_prefix(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|start| start.eq_ignore_ascii_case(prefix))
}
