//! Data collected for a dictionary element, until it can be persisted.

use cpedict_entity::{
    change_type::ChangeType, deprecation_type::DeprecationType, evidence_type::EvidenceType,
};
use time::OffsetDateTime;

#[derive(Debug, Default)]
pub struct GeneratorFragment {
    pub product_name: String,
    pub product_version: String,
    pub schema_version: Option<String>,
    pub timestamp: Option<OffsetDateTime>,
}

/// A `cpe-item`, with all of its content.
#[derive(Debug, Default)]
pub struct CpeItemFragment {
    /// The CPE 2.2 name, as found in the document
    pub name: String,
    pub deprecated: bool,
    pub deprecated_by: Option<String>,
    pub deprecation_date: Option<OffsetDateTime>,
    /// The CPE 2.3 name, from the `cpe23-item`
    pub cpe23: Option<String>,

    pub titles: Vec<TextFragment>,
    pub notes_language: Option<String>,
    pub notes: Vec<TextFragment>,
    pub references: Vec<ReferenceFragment>,
    pub checks: Vec<CheckFragment>,

    pub deprecations: Vec<DeprecationFragment>,
    pub provenance: Option<ProvenanceFragment>,

    /// The leaf element currently open
    pub open_leaf: Option<LeafFragment>,
    /// The deprecation currently open
    pub open_deprecation: Option<DeprecationFragment>,
}

impl CpeItemFragment {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

/// The attributes of a leaf element, waiting for its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafFragment {
    Title { language: String },
    Note { language: String },
    Reference { href: String },
    Check { system: String, href: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub language: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFragment {
    pub href: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFragment {
    pub system: String,
    pub href: Option<String>,
    pub value: String,
}

#[derive(Debug, Default)]
pub struct DeprecationFragment {
    pub date: Option<OffsetDateTime>,
    pub deprecated_by: Vec<DeprecatedByFragment>,
}

/// A replacement name, already resolved to its row.
#[derive(Debug, Clone, Copy)]
pub struct DeprecatedByFragment {
    pub name_id: i32,
    pub deprecation_type: DeprecationType,
}

#[derive(Debug, Default)]
pub struct ProvenanceFragment {
    /// The organization id of the submitter
    pub submitter: Option<i32>,
    /// The organization ids of the authorities
    pub authorities: Vec<i32>,
    pub change_descriptions: Vec<ChangeDescriptionFragment>,

    pub open_organization: Option<OrganizationFragment>,
    pub open_change_description: Option<ChangeDescriptionFragment>,
}

#[derive(Debug)]
pub struct OrganizationFragment {
    pub system_id: String,
    pub name: String,
    pub action_date: OffsetDateTime,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct ChangeDescriptionFragment {
    pub change_type: ChangeType,
    pub date: OffsetDateTime,
    pub comment: Option<String>,
    pub evidence: Option<EvidenceType>,
    pub evidence_reference_id: Option<i32>,
}
