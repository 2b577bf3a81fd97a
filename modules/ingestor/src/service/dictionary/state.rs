//! The states of the dictionary handler, and the transitions between them.
//!
//! Each state stands for "currently inside element X". The handler keeps a stack of them, the
//! empty stack being the idle state before and after the document.

/// The elements of a CPE dictionary, by local name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    CpeList,
    Generator,
    ProductName,
    ProductVersion,
    SchemaVersion,
    Timestamp,
    CpeItem,
    Cpe23Item,
    Title,
    Notes,
    Note,
    References,
    Reference,
    Check,
    Deprecation,
    DeprecatedBy,
    ProvenanceRecord,
    Submitter,
    Authority,
    Description,
    ChangeDescription,
    EvidenceReference,
    Comments,
}

impl Tag {
    pub fn from_local_name(name: &[u8]) -> Option<Self> {
        Some(match name {
            b"cpe-list" => Self::CpeList,
            b"generator" => Self::Generator,
            b"product_name" => Self::ProductName,
            b"product_version" => Self::ProductVersion,
            b"schema_version" => Self::SchemaVersion,
            b"timestamp" => Self::Timestamp,
            b"cpe-item" => Self::CpeItem,
            b"cpe23-item" => Self::Cpe23Item,
            b"title" => Self::Title,
            b"notes" => Self::Notes,
            b"note" => Self::Note,
            b"references" => Self::References,
            b"reference" => Self::Reference,
            b"check" => Self::Check,
            b"deprecation" => Self::Deprecation,
            b"deprecated-by" => Self::DeprecatedBy,
            b"provenance-record" => Self::ProvenanceRecord,
            b"submitter" => Self::Submitter,
            b"authority" => Self::Authority,
            b"description" => Self::Description,
            b"change-description" => Self::ChangeDescription,
            b"evidence-reference" => Self::EvidenceReference,
            b"comments" => Self::Comments,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    CpeList,
    Generator,
    ProductName,
    ProductVersion,
    SchemaVersion,
    Timestamp,
    CpeItem,
    CpeItem23,
    Title,
    NoteList,
    Note,
    ReferenceList,
    Reference,
    Check,
    Deprecation,
    DeprecatedBy,
    ProvenanceRecord,
    Submitter,
    Authority,
    Description,
    ChangeDescription,
    EvidenceReference,
    Comments,
    /// Inside an unexpected element, or one of its descendants
    Skipped,
}

impl State {
    /// The element this state is for.
    pub fn element(&self) -> &'static str {
        match self {
            Self::CpeList => "cpe-list",
            Self::Generator => "generator",
            Self::ProductName => "product_name",
            Self::ProductVersion => "product_version",
            Self::SchemaVersion => "schema_version",
            Self::Timestamp => "timestamp",
            Self::CpeItem => "cpe-item",
            Self::CpeItem23 => "cpe23-item",
            Self::Title => "title",
            Self::NoteList => "notes",
            Self::Note => "note",
            Self::ReferenceList => "references",
            Self::Reference => "reference",
            Self::Check => "check",
            Self::Deprecation => "deprecation",
            Self::DeprecatedBy => "deprecated-by",
            Self::ProvenanceRecord => "provenance-record",
            Self::Submitter => "submitter",
            Self::Authority => "authority",
            Self::Description => "description",
            Self::ChangeDescription => "change-description",
            Self::EvidenceReference => "evidence-reference",
            Self::Comments => "comments",
            Self::Skipped => "skipped element",
        }
    }

    /// Whether the text content of the element is captured.
    pub fn captures_text(&self) -> bool {
        matches!(
            self,
            Self::ProductName
                | Self::ProductVersion
                | Self::SchemaVersion
                | Self::Timestamp
                | Self::Title
                | Self::Note
                | Self::Reference
                | Self::Check
                | Self::Description
                | Self::EvidenceReference
                | Self::Comments
        )
    }
}

/// The state entered when opening `tag` in `current`, `None` being idle.
///
/// Returns `None` when the element is not valid at this point. Such elements are skipped
/// together with their content, which tolerates extensions of the schema.
pub fn transition(current: Option<State>, tag: Tag) -> Option<State> {
    use State as S;
    use Tag as T;

    Some(match (current, tag) {
        (None, T::CpeList) => S::CpeList,

        (Some(S::CpeList), T::Generator) => S::Generator,
        (Some(S::Generator), T::ProductName) => S::ProductName,
        (Some(S::Generator), T::ProductVersion) => S::ProductVersion,
        (Some(S::Generator), T::SchemaVersion) => S::SchemaVersion,
        (Some(S::Generator), T::Timestamp) => S::Timestamp,

        (Some(S::CpeList), T::CpeItem) => S::CpeItem,
        (Some(S::CpeItem), T::Cpe23Item) => S::CpeItem23,
        (Some(S::CpeItem), T::Title) => S::Title,
        (Some(S::CpeItem), T::Notes) => S::NoteList,
        (Some(S::NoteList), T::Note) => S::Note,
        (Some(S::CpeItem), T::References) => S::ReferenceList,
        (Some(S::ReferenceList), T::Reference) => S::Reference,
        (Some(S::CpeItem), T::Check) => S::Check,

        (Some(S::CpeItem23), T::Deprecation) => S::Deprecation,
        (Some(S::Deprecation), T::DeprecatedBy) => S::DeprecatedBy,

        (Some(S::CpeItem23), T::ProvenanceRecord) => S::ProvenanceRecord,
        (Some(S::ProvenanceRecord), T::Submitter) => S::Submitter,
        (Some(S::ProvenanceRecord), T::Authority) => S::Authority,
        (Some(S::Submitter | S::Authority), T::Description) => S::Description,
        (Some(S::ProvenanceRecord), T::ChangeDescription) => S::ChangeDescription,
        (Some(S::ChangeDescription), T::EvidenceReference) => S::EvidenceReference,
        (Some(S::ChangeDescription), T::Comments) => S::Comments,

        _ => return None,
    })
}
