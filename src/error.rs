//! Error types for OCDM to SKG-IF conversion

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to load records from {path}: {reason}")]
    LoadError { path: String, reason: String },

    #[error("Malformed value '{0}': expected 'Name [identifiers]'")]
    MalformedLabelledValue(String),

    #[error("No omid identifier found in '{0}'")]
    MissingCanonicalId(String),

    #[error("Malformed identifier '{0}': expected 'scheme:value'")]
    MalformedIdentifier(String),

    #[error("Invalid publication date '{0}': expected YYYY-MM-DD, YYYY-MM or YYYY")]
    InvalidDate(String),

    #[error("Unknown record type '{record_type}' in {table} mapping")]
    UnknownRecordType {
        record_type: String,
        table: &'static str,
    },

    #[error("Malformed page range '{0}': expected 'first-last'")]
    MalformedPageRange(String),

    #[error("Invalid mappings: {0}")]
    InvalidConfig(String),

    #[error("Record {index} ({id}): {source}")]
    Record {
        index: usize,
        id: String,
        #[source]
        source: Box<ConvertError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
