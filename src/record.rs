//! OCDM API input records

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::vocab::CONTRIBUTOR_SEPARATOR;

/// One bibliographic item as exported by the OCDM API
///
/// Every field is required; an empty string means "absent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub title: String,
    pub author: String,
    pub editor: String,
    pub publisher: String,
    pub pub_date: String,
    pub volume: String,
    pub issue: String,
    pub page: String,
    pub venue: String,
}

impl InputRecord {
    pub fn authors(&self) -> Vec<&str> {
        split_contributors(&self.author)
    }

    pub fn editors(&self) -> Vec<&str> {
        split_contributors(&self.editor)
    }

    pub fn publishers(&self) -> Vec<&str> {
        split_contributors(&self.publisher)
    }

    /// Whether any field of the `biblio` block is present
    pub fn has_biblio(&self) -> bool {
        [&self.volume, &self.page, &self.venue, &self.issue]
            .iter()
            .any(|field| !field.is_empty())
    }
}

/// Split a `; `-delimited contributor list
///
/// An empty list yields a single empty entry, which the contributor
/// extractor skips.
pub fn split_contributors(raw: &str) -> Vec<&str> {
    raw.split(CONTRIBUTOR_SEPARATOR).collect()
}

/// Parse a JSON array of records
pub fn parse_records(content: &str, source: &str) -> Result<Vec<InputRecord>, ConvertError> {
    serde_json::from_str(content).map_err(|e| ConvertError::LoadError {
        path: source.to_string(),
        reason: e.to_string(),
    })
}
