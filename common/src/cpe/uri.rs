//! The CPE 2.2 URI binding.

use super::{Attribute, CpeNameError, Wfn, WfnValue};
use ::cpe::{
    component::Component,
    cpe::{Cpe as _, CpeType, Language},
    uri::Uri,
};

pub(super) const PREFIX: &str = "cpe:/";

const URI_ATTRIBUTES: [Attribute; 7] = [
    Attribute::Part,
    Attribute::Vendor,
    Attribute::Product,
    Attribute::Version,
    Attribute::Update,
    Attribute::Edition,
    Attribute::Language,
];

const PACKED_ATTRIBUTES: [Attribute; 5] = [
    Attribute::Edition,
    Attribute::SwEdition,
    Attribute::TargetSw,
    Attribute::TargetHw,
    Attribute::Other,
];

/// Unbind a CPE 2.2 URI, decoding its components with the `cpe` crate.
pub(super) fn unbind(name: &str) -> Result<Wfn, CpeNameError> {
    let rest = name
        .strip_prefix(PREFIX)
        .ok_or_else(|| CpeNameError::Binding(name.to_string()))?;

    // the parser ignores anything after the language
    let found = rest.split(':').count();
    if found > URI_ATTRIBUTES.len() {
        return Err(CpeNameError::ComponentCount {
            expected: URI_ATTRIBUTES.len(),
            found,
        });
    }

    let uri = Uri::parse(name).map_err(|err| CpeNameError::Uri(format!("{name}: {err}")))?;

    Ok(Wfn {
        part: uri.part().into(),
        vendor: uri.vendor().into(),
        product: uri.product().into(),
        version: uri.version().into(),
        update: uri.update().into(),
        edition: uri.edition().into(),
        sw_edition: uri.sw_edition().into(),
        target_sw: uri.target_sw().into(),
        target_hw: uri.target_hw().into(),
        other: uri.other().into(),
        language: uri.language().into(),
    })
}

/// Escape a decoded URI value into WFN form.
///
/// `*` and `?` only come from the `%02` and `%01` encodings, and stay wildcards.
fn escape(decoded: &str) -> WfnValue {
    let mut result = String::with_capacity(decoded.len());
    for c in decoded.to_lowercase().chars() {
        if !(c.is_alphanumeric() || matches!(c, '_' | '*' | '?')) {
            result.push('\\');
        }
        result.push(c);
    }

    WfnValue::Value(result)
}

impl From<Component<'_>> for WfnValue {
    fn from(value: Component<'_>) -> Self {
        match value {
            Component::Any => Self::Any,
            Component::NotApplicable => Self::Na,
            Component::Value(inner) => escape(&inner),
        }
    }
}

impl From<CpeType> for WfnValue {
    fn from(value: CpeType) -> Self {
        match value {
            CpeType::Any | CpeType::Empty => Self::Any,
            CpeType::Hardware => Self::Value("h".into()),
            CpeType::OperatingSystem => Self::Value("o".into()),
            CpeType::Application => Self::Value("a".into()),
        }
    }
}

impl From<&Language> for WfnValue {
    fn from(value: &Language) -> Self {
        match value {
            Language::Any => Self::Any,
            Language::Language(tag) => escape(&tag.to_string()),
        }
    }
}

/// Bind a WFN to a CPE 2.2 URI.
///
/// Empty trailing components are dropped, ANY is bound as an empty component.
pub(super) fn bind(wfn: &Wfn) -> String {
    let mut fields: Vec<String> = URI_ATTRIBUTES
        .into_iter()
        .map(|attribute| match attribute {
            Attribute::Edition => pack_edition(wfn),
            attribute => encode(wfn.get(attribute)),
        })
        .collect();

    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    format!("{PREFIX}{}", fields.join(":"))
}

fn pack_edition(wfn: &Wfn) -> String {
    let extended = PACKED_ATTRIBUTES[1..]
        .iter()
        .any(|attribute| !wfn.get(*attribute).is_any());

    if !extended {
        return encode(&wfn.edition);
    }

    PACKED_ATTRIBUTES
        .iter()
        .map(|attribute| format!("~{}", encode(wfn.get(*attribute))))
        .collect()
}

fn encode(value: &WfnValue) -> String {
    let value = match value {
        WfnValue::Any => return String::new(),
        WfnValue::Na => return "-".to_string(),
        WfnValue::Value(value) => value,
    };

    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('-' | '.')) => result.push(escaped),
                Some(escaped) => result.push_str(&format!("%{:02x}", escaped as u32)),
                None => {}
            },
            '?' => result.push_str("%01"),
            '*' => result.push_str("%02"),
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cpe:/a:mozilla:firefox:22", "firefox", WfnValue::Value("22".into()))]
    #[case("cpe:/a:Mozilla:FireFox", "firefox", WfnValue::Any)]
    #[case("cpe:/o:redhat:enterprise_linux:-", "enterprise_linux", WfnValue::Na)]
    #[case("cpe:/a:foo:bar%21:1.0", "bar\\!", WfnValue::Value("1\\.0".into()))]
    #[case("cpe:/a:foo:bar:1.%02", "bar", WfnValue::Value("1\\.*".into()))]
    #[test_log::test]
    fn decode_names(
        #[case] name: &str,
        #[case] product: &str,
        #[case] version: WfnValue,
    ) -> Result<(), CpeNameError> {
        let wfn = unbind(name)?;

        assert_eq!(wfn.product, WfnValue::Value(product.to_string()));
        assert_eq!(wfn.version, version);

        Ok(())
    }

    #[test_log::test]
    fn unpack_extended_attributes() -> Result<(), CpeNameError> {
        let wfn = unbind("cpe:/a:hp:insight_diagnostics:7.4.0.1570::~~online~win2003~x64~")?;

        assert_eq!(wfn.update, WfnValue::Any);
        assert_eq!(wfn.edition, WfnValue::Any);
        assert_eq!(wfn.sw_edition, WfnValue::Value("online".into()));
        assert_eq!(wfn.target_sw, WfnValue::Value("win2003".into()));
        assert_eq!(wfn.target_hw, WfnValue::Value("x64".into()));
        assert_eq!(wfn.other, WfnValue::Any);

        Ok(())
    }

    #[test_log::test]
    fn language_tag() -> Result<(), CpeNameError> {
        let wfn = unbind("cpe:/a:microsoft:internet_explorer:8.0:beta::es-ES")?;

        assert_eq!(wfn.part, WfnValue::Value("a".into()));
        assert_eq!(wfn.edition, WfnValue::Any);
        assert_eq!(wfn.language, WfnValue::Value("es\\-es".into()));

        Ok(())
    }

    #[rstest]
    #[case("cpe:2.3:a:mozilla:firefox:22:*:*:*:*:*:*:*")]
    #[case("cpe:/a:mozilla:firefox:22:beta:gold:en:extra")]
    #[case("cpe:/a:mozilla:firefox:22:beta:~gold~online")]
    #[case("cpe:/a:mozilla:firefox:22%zz")]
    #[case("cpe:/a:mozilla:fire fox")]
    #[case("cpe:/x:mozilla:firefox")]
    #[test_log::test]
    fn unbind_rejects(#[case] name: &str) {
        assert!(unbind(name).is_err(), "{name} must be rejected");
    }

    #[test_log::test]
    fn bind_trims_trailing_any() {
        let wfn = Wfn {
            part: WfnValue::literal("a"),
            vendor: WfnValue::literal("mozilla"),
            product: WfnValue::literal("firefox"),
            version: WfnValue::literal("22"),
            ..Default::default()
        };

        assert_eq!(bind(&wfn), "cpe:/a:mozilla:firefox:22");
    }

    #[rstest]
    #[case("cpe:/a:foo:bar%21:1.0")]
    #[case("cpe:/a:redhat:quarkus:2.13::el8")]
    #[case("cpe:/a:hp:insight_diagnostics:7.4.0.1570::~~online~win2003~x64~")]
    #[test_log::test]
    fn bind_reverses_unbind(#[case] name: &str) -> Result<(), CpeNameError> {
        assert_eq!(bind(&unbind(name)?), name);

        Ok(())
    }
}
