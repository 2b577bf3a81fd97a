use super::{Attribute, CpeNameError, Wfn, WfnValue};

/// Validate all attributes of a WFN.
///
/// Every value must be a well-formed attribute-value string: an optional leading `*` or run of
/// `?`, a non-empty body of alphanumerics, underscores and escaped punctuation, and an optional
/// trailing `*` or run of `?`. On top of that, `part` must be one of `a`, `o` or `h`, and
/// `language` must be a language tag with an optional region.
pub fn validate(wfn: &Wfn) -> Result<(), CpeNameError> {
    for attribute in Attribute::ALL {
        let WfnValue::Value(value) = wfn.get(attribute) else {
            continue;
        };

        let valid = match attribute {
            Attribute::Part => matches!(value.as_str(), "a" | "o" | "h"),
            Attribute::Language => is_language(value),
            _ => is_avstring(value),
        };

        if !valid {
            return Err(CpeNameError::InvalidValue {
                attribute: attribute.name(),
                value: value.clone(),
            });
        }
    }

    Ok(())
}

fn is_avstring(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let mut pos = 0;

    if chars.first() == Some(&'*') {
        pos = 1;
    } else {
        while chars.get(pos) == Some(&'?') {
            pos += 1;
        }
    }

    let body_start = pos;
    while let Some(c) = chars.get(pos) {
        match c {
            '\\' => match chars.get(pos + 1) {
                Some(escaped) if escaped.is_ascii_punctuation() => pos += 2,
                _ => return false,
            },
            c if c.is_alphanumeric() || *c == '_' => pos += 1,
            _ => break,
        }
    }

    if pos == body_start {
        return false;
    }

    match &chars[pos..] {
        [] | ['*'] => true,
        tail => tail.iter().all(|c| *c == '?'),
    }
}

/// Two or three letters, optionally followed by an escaped hyphen and a region of either two
/// letters or three digits.
fn is_language(value: &str) -> bool {
    let (language, region) = match value.split_once("\\-") {
        Some((language, region)) => (language, Some(region)),
        None => (value, None),
    };

    let language_valid =
        (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());

    let region_valid = match region {
        None => true,
        Some(region) => {
            (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
                || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit()))
        }
    };

    language_valid && region_valid
}
