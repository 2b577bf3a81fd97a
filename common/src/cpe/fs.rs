//! The CPE 2.3 formatted string binding.

use super::{Attribute, CpeNameError, Wfn, WfnValue};

pub(super) const PREFIX: &str = "cpe:2.3:";

pub(super) fn unbind(name: &str) -> Result<Wfn, CpeNameError> {
    let rest = name
        .get(..PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(PREFIX))
        .and_then(|_| name.get(PREFIX.len()..))
        .ok_or_else(|| CpeNameError::Binding(name.to_string()))?;

    let fields = split_unescaped(rest);
    if fields.len() != Attribute::ALL.len() {
        return Err(CpeNameError::ComponentCount {
            expected: Attribute::ALL.len(),
            found: fields.len(),
        });
    }

    let mut wfn = Wfn::default();
    for (attribute, field) in Attribute::ALL.into_iter().zip(fields) {
        *wfn.get_mut(attribute) = unbind_value(attribute, field)?;
    }

    Ok(wfn)
}

pub(super) fn bind(wfn: &Wfn) -> String {
    let mut result = String::from("cpe:2.3");
    for attribute in Attribute::ALL {
        result.push(':');
        match wfn.get(attribute) {
            WfnValue::Any => result.push('*'),
            WfnValue::Na => result.push('-'),
            WfnValue::Value(value) => bind_value(value, &mut result),
        }
    }
    result
}

/// Split on every colon which is not escaped by a backslash.
fn split_unescaped(s: &str) -> Vec<&str> {
    let mut fields = vec![];
    let mut start = 0;
    let mut escaped = false;

    for (idx, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ':' => {
                fields.push(&s[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    fields.push(&s[start..]);

    fields
}

fn unbind_value(attribute: Attribute, field: &str) -> Result<WfnValue, CpeNameError> {
    match field {
        "*" => return Ok(WfnValue::Any),
        "-" => return Ok(WfnValue::Na),
        "" => {
            return Err(CpeNameError::InvalidValue {
                attribute: attribute.name(),
                value: field.to_string(),
            })
        }
        _ => {}
    }

    let mut result = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars.next().ok_or_else(|| CpeNameError::InvalidValue {
                    attribute: attribute.name(),
                    value: field.to_string(),
                })?;
                result.push('\\');
                result.push(escaped);
            }
            '*' | '?' => result.push(c),
            c if c.is_alphanumeric() || c == '_' => result.push(c),
            c => {
                result.push('\\');
                result.push(c);
            }
        }
    }

    Ok(WfnValue::Value(result))
}

fn bind_value(value: &str, result: &mut String) {
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('.' | '-' | '_')) => result.push(escaped),
                Some(escaped) => {
                    result.push('\\');
                    result.push(escaped);
                }
                None => result.push('\\'),
            },
            c => result.push(c),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cpe:2.3:a:mozilla:firefox:22:*:*:*:*:*:*:*", "firefox", "22")]
    #[case("cpe:2.3:a:hp:insight_diagnostics:7.4.0.1570:-:*:*:online:win2003:x64:*", "insight_diagnostics", "7\\.4\\.0\\.1570")]
    #[case("cpe:2.3:a:foo\\:bar:baz:1\\:2:*:*:*:*:*:*:*", "baz", "1\\:2")]
    #[case("CPE:2.3:a:foo:bar:1.*:*:*:*:*:*:*:*", "bar", "1\\.*")]
    #[test_log::test]
    fn unbind_names(
        #[case] name: &str,
        #[case] product: &str,
        #[case] version: &str,
    ) -> Result<(), CpeNameError> {
        let wfn = unbind(name)?;

        assert_eq!(wfn.product, WfnValue::Value(product.to_string()));
        assert_eq!(wfn.version, WfnValue::Value(version.to_string()));

        Ok(())
    }

    #[test_log::test]
    fn unbind_logical_values() -> Result<(), CpeNameError> {
        let wfn = unbind("cpe:2.3:a:hp:insight_diagnostics:7.4.0.1570:-:*:*:online:win2003:x64:*")?;

        assert_eq!(wfn.update, WfnValue::Na);
        assert_eq!(wfn.edition, WfnValue::Any);
        assert_eq!(wfn.sw_edition, WfnValue::Value("online".into()));
        assert_eq!(wfn.other, WfnValue::Any);

        Ok(())
    }

    #[rstest]
    #[case("cpe:/a:mozilla:firefox:22")]
    #[case("cpe:2.3:a:mozilla:firefox:22:*:*:*:*:*:*")]
    #[case("cpe:2.3:a:mozilla:firefox:22:*:*:*:*:*:*:*:*")]
    #[case("cpe:2.3:a:mozilla::22:*:*:*:*:*:*:*")]
    #[case("cpe:2.3:a:mozilla:firefox\\:*:*:*:*:*:*:*:*")]
    #[test_log::test]
    fn unbind_rejects(#[case] name: &str) {
        assert!(unbind(name).is_err(), "{name} must be rejected");
    }

    #[test_log::test]
    fn bind_unescapes_common_punctuation() -> Result<(), CpeNameError> {
        let name = "cpe:2.3:a:foo\\!bar:baz_qux:1.0-rc1:*:*:*:*:*:*:*";
        assert_eq!(bind(&unbind(name)?), name);

        Ok(())
    }
}
