//! SKG-IF entity model
//!
//! Typed graph nodes. Field order follows the SKG-IF examples published
//! by OpenCitations, and optional fields are omitted rather than null.

use serde::Serialize;

use crate::id::Identifier;
use crate::mapping::{ProductType, VenueType};

/// Discriminator written as `entity_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Product,
    Person,
    Organisation,
    Agent,
    Venue,
}

/// Contributor role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    Editor,
    Publisher,
}

impl Role {
    /// Publishers are unordered; authors and editors carry a rank
    pub fn is_ranked(self) -> bool {
        !matches!(self, Role::Publisher)
    }
}

/// Role-tagged link from a product or venue to an agent URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub by: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// A person, organisation or generic agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub local_identifier: String,
    pub identifiers: Vec<Identifier>,
    pub entity_type: EntityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub en: String,
}

/// Classification of a manifestation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestationType {
    pub class: String,
    pub labels: Labels,
    pub defined_in: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dates {
    pub publication: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pages {
    pub first: String,
    pub last: String,
}

/// Bibliographic locators of a manifestation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Biblio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
    /// URI of the venue this manifestation appears in
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

/// One concrete publication instance of a research product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifestation {
    #[serde(rename = "type")]
    pub manifestation_type: ManifestationType,
    pub identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Dates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biblio: Option<Biblio>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Titles {
    pub none: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchProduct {
    pub entity_type: EntityType,
    pub local_identifier: String,
    pub identifiers: Vec<Identifier>,
    pub product_type: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles: Option<Titles>,
    pub contributions: Vec<Contribution>,
    pub manifestations: Vec<Manifestation>,
}

/// The outlet (journal, book, ...) a manifestation appears in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub local_identifier: String,
    pub entity_type: EntityType,
    pub title: String,
    #[serde(rename = "type")]
    pub venue_type: VenueType,
    pub identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributions: Vec<Contribution>,
}

/// Any node of the output `@graph`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Product(ResearchProduct),
    Agent(Agent),
    Venue(Venue),
}

impl Node {
    pub fn local_identifier(&self) -> &str {
        match self {
            Node::Product(p) => &p.local_identifier,
            Node::Agent(a) => &a.local_identifier,
            Node::Venue(v) => &v.local_identifier,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Node::Product(p) => p.entity_type,
            Node::Agent(a) => a.entity_type,
            Node::Venue(v) => v.entity_type,
        }
    }
}
