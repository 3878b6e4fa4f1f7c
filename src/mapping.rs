//! Record-type lookup tables
//!
//! The tables that classify an OCDM record type (manifestation class,
//! venue sub-type, product type) and the namespaces used in the output.
//! `TypeMappings::default()` holds the OpenCitations Meta tables; a JSON
//! file may override any subset of them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConvertError;
use crate::vocab::{FABIO_NS, OC_META_BASE, SKG_IF_CONTEXT, SKG_IF_SANDBOX};

/// Manifestation classification for one record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMapping {
    /// Class URI, e.g. fabio:JournalArticle
    pub class: String,
    /// Vocabulary the class is defined in
    pub defined_in: String,
}

/// SKG-IF venue sub-type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Journal,
    Book,
    Conference,
    Repository,
}

/// Top-level SKG-IF product type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "literature")]
    Literature,
    #[serde(rename = "research data")]
    ResearchData,
    #[serde(rename = "research software")]
    ResearchSoftware,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeMappings {
    /// Namespace `omid:` values are appended to
    pub canonical_base: String,
    /// Shared vocabulary URI of the output `@context`
    pub context_vocabulary: String,
    /// `@base` and `skg:` prefix of the output `@context`
    pub sandbox_base: String,
    /// record type -> manifestation class
    pub classes: BTreeMap<String, ClassMapping>,
    /// record type -> venue sub-type
    pub venue_types: BTreeMap<String, VenueType>,
    /// Record types classified as research data
    pub research_data_types: Vec<String>,
    /// Record types classified as research software
    pub research_software_types: Vec<String>,
}

impl Default for TypeMappings {
    fn default() -> Self {
        let fabio = |class: &str| ClassMapping {
            class: format!("{}/{}", FABIO_NS, class),
            defined_in: FABIO_NS.to_string(),
        };

        let classes = BTreeMap::from([
            ("journal article".to_string(), fabio("JournalArticle")),
            ("book chapter".to_string(), fabio("BookChapter")),
        ]);

        let venue_types = BTreeMap::from([
            ("journal article".to_string(), VenueType::Journal),
            ("book chapter".to_string(), VenueType::Book),
        ]);

        Self {
            canonical_base: OC_META_BASE.to_string(),
            context_vocabulary: SKG_IF_CONTEXT.to_string(),
            sandbox_base: SKG_IF_SANDBOX.to_string(),
            classes,
            venue_types,
            research_data_types: vec!["data file".to_string(), "dataset".to_string()],
            research_software_types: vec!["software".to_string()],
        }
    }
}

impl TypeMappings {
    /// Load mappings from a JSON file; omitted keys keep their defaults
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let content = fs::read_to_string(path).map_err(|e| ConvertError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConvertError> {
        let mappings: Self = serde_json::from_str(content)
            .map_err(|e| ConvertError::InvalidConfig(e.to_string()))?;
        mappings.validate()?;
        Ok(mappings)
    }

    /// Check that every namespace is an absolute URL
    pub fn validate(&self) -> Result<(), ConvertError> {
        let namespaces = [
            ("canonical_base", &self.canonical_base),
            ("context_vocabulary", &self.context_vocabulary),
            ("sandbox_base", &self.sandbox_base),
        ];

        for (key, value) in namespaces {
            Url::parse(value)
                .map_err(|e| ConvertError::InvalidConfig(format!("{} '{}': {}", key, value, e)))?;
        }

        for (record_type, mapping) in &self.classes {
            Url::parse(&mapping.class).map_err(|e| {
                ConvertError::InvalidConfig(format!(
                    "class for '{}' '{}': {}",
                    record_type, mapping.class, e
                ))
            })?;
        }

        Ok(())
    }

    /// Manifestation class for a record type
    pub fn class_for(&self, record_type: &str) -> Result<&ClassMapping, ConvertError> {
        self.classes
            .get(record_type)
            .ok_or_else(|| ConvertError::UnknownRecordType {
                record_type: record_type.to_string(),
                table: "class",
            })
    }

    /// Venue sub-type for a record type
    pub fn venue_type_for(&self, record_type: &str) -> Result<VenueType, ConvertError> {
        self.venue_types
            .get(record_type)
            .copied()
            .ok_or_else(|| ConvertError::UnknownRecordType {
                record_type: record_type.to_string(),
                table: "venue type",
            })
    }

    /// Product type for a record type; anything unlisted is literature
    pub fn product_type_for(&self, record_type: &str) -> ProductType {
        let listed = |types: &[String]| types.iter().any(|t| t == record_type);

        if listed(&self.research_data_types) {
            ProductType::ResearchData
        } else if listed(&self.research_software_types) {
            ProductType::ResearchSoftware
        } else {
            ProductType::Literature
        }
    }
}
