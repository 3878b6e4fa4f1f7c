//! Identifier parsing for OCDM composite strings
//!
//! OCDM stores identifiers as space-delimited `scheme:value` tokens, and
//! contributors and venues as `Name [identifiers]`. These helpers split
//! those strings into structured values and rewrite the `omid:` token
//! into the canonical URI used as `local_identifier`.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::vocab::OMID_SCHEME;

/// A single `{scheme, value}` identifier pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub scheme: String,
    pub value: String,
}

impl Identifier {
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }
}

/// A `Name [identifiers]` string split into its two parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labelled<'a> {
    pub name: &'a str,
    pub identifiers: &'a str,
}

/// Split a `Name [identifiers]` string
///
/// The bracket group is the last ` [...]` suffix; both the name and the
/// bracketed content must be non-empty.
///
/// "Smith, John [omid:ra/1 orcid:0000-0001]" -> ("Smith, John", "omid:ra/1 orcid:0000-0001")
pub fn parse_labelled(raw: &str) -> Result<Labelled<'_>, ConvertError> {
    let malformed = || ConvertError::MalformedLabelledValue(raw.to_string());

    let inner = raw.strip_suffix(']').ok_or_else(malformed)?;

    inner
        .rmatch_indices(" [")
        .find_map(|(pos, _)| {
            let name = &inner[..pos];
            let identifiers = &inner[pos + 2..];
            (!name.is_empty() && !identifiers.is_empty()).then_some(Labelled { name, identifiers })
        })
        .ok_or_else(malformed)
}

/// Rewrite the `omid:` token of an identifier list into a URI under `base`
///
/// "doi:10.1000/abc omid:br/0612" with base "https://w3id.org/oc/meta/"
/// -> "https://w3id.org/oc/meta/br/0612"
///
/// When several `omid:` tokens are present the last one wins.
pub fn resolve_canonical(raw: &str, base: &str) -> Result<String, ConvertError> {
    raw.split(' ')
        .rev()
        .filter_map(|token| token.split_once(':'))
        .find(|(scheme, value)| *scheme == OMID_SCHEME && !value.is_empty())
        .map(|(_, value)| format!("{}{}", base, value))
        .ok_or_else(|| ConvertError::MissingCanonicalId(raw.to_string()))
}

/// Split an identifier list into `{scheme, value}` pairs
///
/// Every token is kept, in order and without deduplication, including
/// the `omid:` token itself. Each token splits on its first colon.
pub fn extract_identifiers(raw: &str) -> Result<Vec<Identifier>, ConvertError> {
    raw.split(' ')
        .map(|token| {
            token
                .split_once(':')
                .map(|(scheme, value)| Identifier::new(scheme, value))
                .ok_or_else(|| ConvertError::MalformedIdentifier(token.to_string()))
        })
        .collect()
}
