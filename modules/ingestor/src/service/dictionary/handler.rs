use super::{
    fragment::{
        ChangeDescriptionFragment, CheckFragment, CpeItemFragment, DeprecatedByFragment,
        DeprecationFragment, GeneratorFragment, LeafFragment, OrganizationFragment,
        ProvenanceFragment, ReferenceFragment, TextFragment,
    },
    state::{transition, State, Tag},
};
use crate::{
    graph::{
        cpe_item::CpeItemInformation, cpe_list::CpeListContext, generator::GeneratorInformation,
        organization::OrganizationInformation, provenance::ChangeDescriptionInformation, Graph,
    },
    service::Error,
};
use cpedict_common::{
    cpe::{CpeVersion, Wfn},
    time::{now_rfc3339, parse_datetime},
};
use cpedict_entity::{
    change_type::ChangeType, cpe_list, deprecation_type::DeprecationType,
    evidence_type::EvidenceType,
};
use quick_xml::events::BytesStart;
use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

/// What a parsed document produced.
#[derive(Clone, Debug)]
pub struct ImportReport {
    pub cpe_list: cpe_list::Model,
    /// The number of persisted items
    pub items: usize,
    /// One entry per skipped element
    pub warnings: Vec<String>,
}

/// The attributes of an element, by local name.
struct Attributes(Vec<(String, String)>);

impl Attributes {
    fn parse(element: &BytesStart<'_>) -> Result<Self, Error> {
        let mut result = Vec::new();

        for attr in element.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = std::str::from_utf8(attr.key.local_name().into_inner())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            result.push((key, value));
        }

        Ok(Self(result))
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn require(&self, element: &'static str, attribute: &'static str) -> Result<&str, Error> {
        self.get(attribute)
            .ok_or(Error::MissingAttribute { element, attribute })
    }

    fn require_date(
        &self,
        element: &'static str,
        attribute: &'static str,
    ) -> Result<OffsetDateTime, Error> {
        parse_date(element, attribute, self.require(element, attribute)?)
    }
}

fn parse_date(
    element: &'static str,
    field: &'static str,
    value: &str,
) -> Result<OffsetDateTime, Error> {
    parse_datetime(value).map_err(|_| Error::InvalidValue {
        element,
        field,
        value: value.to_string(),
    })
}

fn parse_bool(element: &'static str, field: &'static str, value: &str) -> Result<bool, Error> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::InvalidValue {
            element,
            field,
            value: value.to_string(),
        }),
    }
}

/// Up to two integer and two fractional digits, like `2.3`.
fn is_schema_version(value: &str) -> bool {
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };

    let digits =
        |s: &str, min| (min..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());

    digits(integer, 1) && fraction.is_none_or(|fraction| digits(fraction, 1))
}

fn parse_name(element: &'static str, name: &str, version: CpeVersion) -> Result<Wfn, Error> {
    Wfn::from_name(name, version).map_err(|source| Error::InvalidCpeName {
        element,
        name: name.to_string(),
        source,
    })
}

/// Consumes the events of a dictionary document, and writes its content to the store.
///
/// Rows are written as soon as everything they depend on is known: the list when it opens, the
/// generator when it closes, and an item together with all of its content when the item closes.
pub struct DictionaryHandler<'g, C> {
    graph: &'g Graph,
    connection: &'g C,

    stack: Vec<State>,
    text: String,

    cpe_list: Option<CpeListContext<'g>>,
    generator: Option<GeneratorFragment>,
    item: Option<CpeItemFragment>,

    items: usize,
    warnings: Vec<String>,
}

impl<'g, C: ConnectionTrait> DictionaryHandler<'g, C> {
    pub fn new(graph: &'g Graph, connection: &'g C) -> Self {
        Self {
            graph,
            connection,
            stack: vec![],
            text: String::new(),
            cpe_list: None,
            generator: None,
            item: None,
            items: 0,
            warnings: vec![],
        }
    }

    pub async fn start(&mut self, element: &BytesStart<'_>) -> Result<(), Error> {
        let current = self.stack.last().copied();

        if current == Some(State::Skipped) {
            self.stack.push(State::Skipped);
            return Ok(());
        }

        let local_name = element.local_name();
        let next =
            Tag::from_local_name(local_name.as_ref()).and_then(|tag| transition(current, tag));

        let Some(next) = next else {
            self.skip(local_name.as_ref(), current);
            self.stack.push(State::Skipped);
            return Ok(());
        };

        let attributes = Attributes::parse(element)?;
        self.open(next, &attributes).await?;

        if next.captures_text() {
            self.text.clear();
        }
        self.stack.push(next);

        Ok(())
    }

    pub fn text(&mut self, text: &str) {
        if self.stack.last().is_some_and(State::captures_text) {
            self.text.push_str(text);
        }
    }

    pub async fn end(&mut self) -> Result<(), Error> {
        let Some(state) = self.stack.pop() else {
            return Ok(());
        };

        let text = if state.captures_text() {
            std::mem::take(&mut self.text).trim().to_string()
        } else {
            String::new()
        };

        self.close(state, text).await
    }

    /// Finish the document, returning what it produced.
    pub fn finish(self) -> Result<ImportReport, Error> {
        if let Some(state) = self.stack.last() {
            return Err(Error::Xml(quick_xml::Error::IllFormed(
                quick_xml::errors::IllFormedError::MissingEndTag(state.element().to_string()),
            )));
        }

        let cpe_list = self.cpe_list.ok_or(Error::MissingElement("cpe-list"))?;

        Ok(ImportReport {
            cpe_list: cpe_list.cpe_list,
            items: self.items,
            warnings: self.warnings,
        })
    }

    fn skip(&mut self, name: &[u8], current: Option<State>) {
        let name = String::from_utf8_lossy(name);
        let warning = match current {
            Some(state) => format!("skipped <{name}> in <{}>", state.element()),
            None => format!("skipped root element <{name}>"),
        };

        log::debug!("{warning}");
        self.warnings.push(warning);
    }

    fn item_mut(&mut self) -> Result<&mut CpeItemFragment, Error> {
        self.item.as_mut().ok_or(Error::MissingElement("cpe-item"))
    }

    fn provenance_mut(&mut self) -> Result<&mut ProvenanceFragment, Error> {
        self.item_mut()?
            .provenance
            .as_mut()
            .ok_or(Error::MissingElement("provenance-record"))
    }

    fn change_description_mut(&mut self) -> Result<&mut ChangeDescriptionFragment, Error> {
        self.provenance_mut()?
            .open_change_description
            .as_mut()
            .ok_or(Error::MissingElement("change-description"))
    }

    fn generator_mut(&mut self) -> Result<&mut GeneratorFragment, Error> {
        self.generator
            .as_mut()
            .ok_or(Error::MissingElement("generator"))
    }

    fn cpe_list(&self) -> Result<&CpeListContext<'g>, Error> {
        self.cpe_list
            .as_ref()
            .ok_or(Error::MissingElement("cpe-list"))
    }

    async fn open(&mut self, state: State, attributes: &Attributes) -> Result<(), Error> {
        match state {
            State::CpeList => {
                let cpe_list = self
                    .graph
                    .ingest_cpe_list(now_rfc3339(), self.connection)
                    .await?;
                log::info!("importing into CPE list '{}'", cpe_list.cpe_list.name);
                self.cpe_list = Some(cpe_list);
            }
            State::Generator => {
                self.generator = Some(GeneratorFragment::default());
            }
            State::CpeItem => {
                let mut item =
                    CpeItemFragment::new(attributes.require("cpe-item", "name")?.to_string());

                if let Some(deprecated) = attributes.get("deprecated") {
                    item.deprecated = parse_bool("cpe-item", "deprecated", deprecated)?;
                }
                item.deprecated_by = attributes.get("deprecated_by").map(ToString::to_string);
                item.deprecation_date = attributes
                    .get("deprecation_date")
                    .map(|value| parse_date("cpe-item", "deprecation_date", value))
                    .transpose()?;

                self.item = Some(item);
            }
            State::CpeItem23 => {
                let name = attributes.require("cpe23-item", "name")?.to_string();
                let item = self.item_mut()?;
                if item.cpe23.is_some() {
                    return Err(Error::DuplicateCpe23Item {
                        name: item.name.clone(),
                    });
                }
                item.cpe23 = Some(name);
            }
            State::Title => {
                let language = attributes.require("title", "lang")?.to_string();
                self.item_mut()?.open_leaf = Some(LeafFragment::Title { language });
            }
            State::NoteList => {
                let language = attributes.require("notes", "lang")?.to_string();
                self.item_mut()?.notes_language = Some(language);
            }
            State::Note => {
                let item = self.item_mut()?;
                let language = item
                    .notes_language
                    .clone()
                    .ok_or(Error::MissingElement("notes"))?;
                item.open_leaf = Some(LeafFragment::Note { language });
            }
            State::Reference => {
                let href = attributes.require("reference", "href")?.to_string();
                self.item_mut()?.open_leaf = Some(LeafFragment::Reference { href });
            }
            State::Check => {
                let system = attributes.require("check", "system")?.to_string();
                let href = attributes.get("href").map(ToString::to_string);
                self.item_mut()?.open_leaf = Some(LeafFragment::Check { system, href });
            }
            State::Deprecation => {
                let date = attributes
                    .get("date")
                    .map(|value| parse_date("deprecation", "date", value))
                    .transpose()?;
                self.item_mut()?.open_deprecation = Some(DeprecationFragment {
                    date,
                    deprecated_by: vec![],
                });
            }
            State::DeprecatedBy => {
                let deprecation_type: DeprecationType =
                    attributes.require("deprecated-by", "type")?.parse()?;
                let name = attributes.require("deprecated-by", "name")?;

                let wfn = Wfn::detect_version(name)
                    .and_then(|version| Wfn::from_name(name, version))
                    .map_err(|source| Error::InvalidCpeName {
                        element: "deprecated-by",
                        name: name.to_string(),
                        source,
                    })?;
                let name_id = self
                    .graph
                    .ingest_cpe_name(&wfn, self.connection)
                    .await?
                    .cpe_name
                    .id;

                self.item_mut()?
                    .open_deprecation
                    .as_mut()
                    .ok_or(Error::MissingElement("deprecation"))?
                    .deprecated_by
                    .push(DeprecatedByFragment {
                        name_id,
                        deprecation_type,
                    });
            }
            State::ProvenanceRecord => {
                let item = self.item_mut()?;
                if item.provenance.is_some() {
                    return Err(Error::DuplicateProvenanceRecord {
                        name: item.name.clone(),
                    });
                }
                item.provenance = Some(ProvenanceFragment::default());
            }
            State::Submitter | State::Authority => {
                let element = state.element();
                let organization = OrganizationFragment {
                    system_id: attributes.require(element, "system-id")?.to_string(),
                    name: attributes.require(element, "name")?.to_string(),
                    action_date: attributes.require_date(element, "date")?,
                    description: None,
                };
                self.provenance_mut()?.open_organization = Some(organization);
            }
            State::ChangeDescription => {
                let change_type: ChangeType = attributes
                    .require("change-description", "change-type")?
                    .parse()?;
                let date = attributes.require_date("change-description", "date")?;

                self.provenance_mut()?.open_change_description = Some(ChangeDescriptionFragment {
                    change_type,
                    date,
                    comment: None,
                    evidence: None,
                    evidence_reference_id: None,
                });
            }
            State::EvidenceReference => {
                let evidence: EvidenceType = attributes
                    .require("evidence-reference", "evidence")?
                    .parse()?;
                self.change_description_mut()?.evidence = Some(evidence);
            }
            State::ProductName
            | State::ProductVersion
            | State::SchemaVersion
            | State::Timestamp
            | State::ReferenceList
            | State::Description
            | State::Comments
            | State::Skipped => {}
        }

        Ok(())
    }

    async fn close(&mut self, state: State, text: String) -> Result<(), Error> {
        match state {
            State::ProductName => self.generator_mut()?.product_name = text,
            State::ProductVersion => self.generator_mut()?.product_version = text,
            State::SchemaVersion => {
                if !is_schema_version(&text) {
                    return Err(Error::InvalidValue {
                        element: "generator",
                        field: "schema_version",
                        value: text,
                    });
                }
                self.generator_mut()?.schema_version = Some(text);
            }
            State::Timestamp => {
                let timestamp = parse_date("generator", "timestamp", &text)?;
                self.generator_mut()?.timestamp = Some(timestamp);
            }
            State::Generator => self.close_generator().await?,
            State::Title | State::Note | State::Reference | State::Check => {
                let item = self.item_mut()?;
                match item.open_leaf.take() {
                    Some(LeafFragment::Title { language }) => item.titles.push(TextFragment {
                        language,
                        value: text,
                    }),
                    Some(LeafFragment::Note { language }) => item.notes.push(TextFragment {
                        language,
                        value: text,
                    }),
                    Some(LeafFragment::Reference { href }) => {
                        item.references.push(ReferenceFragment { href, name: text })
                    }
                    Some(LeafFragment::Check { system, href }) => item.checks.push(CheckFragment {
                        system,
                        href,
                        value: text,
                    }),
                    None => return Err(Error::MissingElement(state.element())),
                }
            }
            State::NoteList => {
                self.item_mut()?.notes_language = None;
            }
            State::Deprecation => {
                let item = self.item_mut()?;
                if let Some(deprecation) = item.open_deprecation.take() {
                    item.deprecations.push(deprecation);
                }
            }
            State::Description => {
                if let Some(organization) = self.provenance_mut()?.open_organization.as_mut() {
                    organization.description = Some(text).filter(|text| !text.is_empty());
                }
            }
            State::Submitter | State::Authority => {
                let OrganizationFragment {
                    system_id,
                    name,
                    action_date,
                    description,
                } = self
                    .provenance_mut()?
                    .open_organization
                    .take()
                    .ok_or(Error::MissingElement(state.element()))?;

                let organization = self
                    .graph
                    .ingest_organization(
                        OrganizationInformation {
                            system_id,
                            name,
                            action_date,
                            description,
                        },
                        self.connection,
                    )
                    .await?;

                let id = organization.organization.id;
                let provenance = self.provenance_mut()?;
                match state {
                    State::Submitter => provenance.submitter = Some(id),
                    _ => provenance.authorities.push(id),
                }
            }
            State::EvidenceReference => {
                let evidence = self
                    .change_description_mut()?
                    .evidence
                    .ok_or(Error::MissingElement("evidence-reference"))?;

                let evidence_reference = self
                    .graph
                    .ingest_evidence_reference(text, evidence, self.connection)
                    .await?;

                self.change_description_mut()?.evidence_reference_id = Some(evidence_reference.id);
            }
            State::Comments => {
                self.change_description_mut()?.comment = Some(text).filter(|text| !text.is_empty());
            }
            State::ChangeDescription => {
                let provenance = self.provenance_mut()?;
                if let Some(change_description) = provenance.open_change_description.take() {
                    provenance.change_descriptions.push(change_description);
                }
            }
            State::CpeItem => {
                let item = self.item.take().ok_or(Error::MissingElement("cpe-item"))?;
                self.reconcile(item).await?;
                self.items += 1;
            }
            State::CpeList => {
                if let Some(cpe_list) = &self.cpe_list {
                    log::debug!(
                        "finished CPE list '{}' with {} items",
                        cpe_list.cpe_list.name,
                        self.items
                    );
                }
            }
            State::ReferenceList | State::CpeItem23 | State::ProvenanceRecord => {}
            State::DeprecatedBy | State::Skipped => {}
        }

        Ok(())
    }

    async fn close_generator(&mut self) -> Result<(), Error> {
        let GeneratorFragment {
            product_name,
            product_version,
            schema_version,
            timestamp,
        } = self
            .generator
            .take()
            .ok_or(Error::MissingElement("generator"))?;

        let information = GeneratorInformation {
            product_name,
            product_version,
            schema_version: schema_version.ok_or(Error::MissingAttribute {
                element: "generator",
                attribute: "schema_version",
            })?,
            timestamp: timestamp.ok_or(Error::MissingAttribute {
                element: "generator",
                attribute: "timestamp",
            })?,
        };

        self.cpe_list()?
            .ingest_generator(information, self.connection)
            .await?;

        Ok(())
    }

    /// Persist an item and its content, in the order of their dependencies.
    async fn reconcile(&self, item: CpeItemFragment) -> Result<(), Error> {
        let connection = self.connection;

        let name = parse_name("cpe-item", &item.name, CpeVersion::V2_2)?;
        let name = match &item.cpe23 {
            Some(cpe23) => parse_name("cpe23-item", cpe23, CpeVersion::V2_3)?,
            None => name,
        };
        let name_id = self
            .graph
            .ingest_cpe_name(&name, connection)
            .await?
            .cpe_name
            .id;

        let deprecated_by_id = match &item.deprecated_by {
            Some(deprecated_by) => {
                let wfn = parse_name("cpe-item", deprecated_by, CpeVersion::V2_2)?;
                Some(self.graph.ingest_cpe_name(&wfn, connection).await?.cpe_name.id)
            }
            None => None,
        };

        let cpe_item = self
            .cpe_list()?
            .ingest_cpe_item(
                CpeItemInformation {
                    name_id,
                    deprecated: item.deprecated,
                    deprecated_by_id,
                    deprecation_date: item.deprecation_date,
                },
                connection,
            )
            .await?;

        for TextFragment { language, value } in item.titles {
            cpe_item.ingest_title(language, value, connection).await?;
        }
        for TextFragment { language, value } in item.notes {
            cpe_item.ingest_note(language, value, connection).await?;
        }
        for ReferenceFragment { href, name } in item.references {
            cpe_item.ingest_reference(href, name, connection).await?;
        }
        for CheckFragment {
            system,
            href,
            value,
        } in item.checks
        {
            cpe_item.ingest_check(system, href, value, connection).await?;
        }

        for DeprecationFragment {
            date,
            deprecated_by,
        } in item.deprecations
        {
            let deprecation = cpe_item.ingest_deprecation(date, connection).await?;
            for DeprecatedByFragment {
                name_id,
                deprecation_type,
            } in deprecated_by
            {
                deprecation
                    .ingest_deprecated_by(name_id, deprecation_type, connection)
                    .await?;
            }
        }

        if let Some(provenance) = item.provenance {
            let submitter = provenance.submitter.ok_or(Error::MissingAttribute {
                element: "provenance-record",
                attribute: "submitter",
            })?;

            let record = cpe_item
                .ingest_provenance_record(submitter, connection)
                .await?;

            for ChangeDescriptionFragment {
                change_type,
                date,
                comment,
                evidence: _,
                evidence_reference_id,
            } in provenance.change_descriptions
            {
                record
                    .ingest_change_description(
                        ChangeDescriptionInformation {
                            change_type,
                            date,
                            comment,
                            evidence_reference_id,
                        },
                        connection,
                    )
                    .await?;
            }

            for authority in provenance.authorities {
                record.add_authority(authority, connection).await?;
            }
        }

        log::debug!("imported CPE item {}", item.name);

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.3", true)]
    #[case("2", true)]
    #[case("10.25", true)]
    #[case("100.1", false)]
    #[case("2.345", false)]
    #[case("2.", false)]
    #[case("", false)]
    #[case("v2.3", false)]
    #[test_log::test]
    fn schema_version(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_schema_version(value), expected, "{value}");
    }

    #[rstest]
    #[case("true", true)]
    #[case("1", true)]
    #[case("false", false)]
    #[case("0", false)]
    #[test_log::test]
    fn deprecated_flag(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(parse_bool("cpe-item", "deprecated", value).ok(), Some(expected));
    }

    #[test_log::test]
    fn deprecated_flag_rejects_other_values() {
        assert!(matches!(
            parse_bool("cpe-item", "deprecated", "yes"),
            Err(Error::InvalidValue {
                field: "deprecated",
                ..
            })
        ));
    }

    #[test_log::test]
    fn attributes_match_local_names() -> Result<(), anyhow::Error> {
        let element = BytesStart::from_content(
            r#"title xml:lang="en-US" cpe-23:name="cpe:2.3:a:foo:bar:*:*:*:*:*:*:*:*""#,
            5,
        );
        let attributes = Attributes::parse(&element)?;

        assert_eq!(attributes.get("lang"), Some("en-US"));
        assert_eq!(
            attributes.get("name"),
            Some("cpe:2.3:a:foo:bar:*:*:*:*:*:*:*:*")
        );
        assert!(matches!(
            attributes.require("title", "href"),
            Err(Error::MissingAttribute {
                element: "title",
                attribute: "href"
            })
        ));

        Ok(())
    }

    #[test_log::test]
    fn invalid_names_carry_the_element() {
        let err = parse_name("cpe-item", "cpe:/x:foo:bar", CpeVersion::V2_2);
        assert!(matches!(
            err,
            Err(Error::InvalidCpeName {
                element: "cpe-item",
                ..
            })
        ));
    }
}
