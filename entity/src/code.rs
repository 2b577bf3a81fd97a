//! Mapping between the enumerated codes of a dictionary and their schema tokens.

use strum::VariantArray;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} code: {token}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub token: String,
}

/// Normalize a token for comparison, ignoring ASCII case and `_`/`-` separators.
fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Find the variant whose canonical token matches the given one.
pub(crate) fn parse_code<T>(kind: &'static str, token: &str) -> Result<T, UnknownCode>
where
    T: VariantArray + Copy + Into<&'static str>,
{
    let wanted = normalize(token.trim());

    T::VARIANTS
        .iter()
        .copied()
        .find(|variant| normalize((*variant).into()) == wanted)
        .ok_or_else(|| UnknownCode {
            kind,
            token: token.to_string(),
        })
}
