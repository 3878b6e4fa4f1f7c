//! OCDM to SKG-IF Conversion Library
//!
//! This library converts bibliographic records exported by the
//! OpenCitations Meta (OCDM) API, where every field is a flat delimited
//! string, into a linked SKG-IF JSON-LD graph of research products,
//! agents and venues.
//!
//! # Overview
//!
//! Each input record is processed in a single pass:
//!
//! 1. The record's `omid:` identifier is rewritten into a canonical URI
//!    and every `scheme:value` token becomes an identifier pair
//! 2. Author, editor and publisher lists become ranked contributions and
//!    the agents (persons, organisations, generic agents) they reference
//! 3. A manifestation is built from the record type, publication date
//!    and bibliographic locators, together with a venue entity when the
//!    record names one
//! 4. The research product, newly seen agents and the venue are appended
//!    to one ordered graph; agents are emitted once per canonical URI
//!
//! Any malformed record aborts the whole conversion.
//!
//! # Usage
//!
//! ```ignore
//! use ocdm_skgif::{convert, parse_records, to_json_string, ConvertOptions};
//!
//! let records = parse_records(&content, "meta.json")?;
//! let result = convert(&records, &ConvertOptions::default())?;
//!
//! println!("{}", to_json_string(&result, true)?);
//! ```

pub mod contributor;
pub mod convert;
pub mod date;
pub mod error;
pub mod graph;
pub mod id;
pub mod manifestation;
pub mod mapping;
pub mod model;
pub mod record;
pub mod vocab;

// Re-export main types for convenience
pub use crate::convert::{
    convert, to_json_string, to_jsonld, ConvertOptions, ConvertResult, ConvertStats,
};
pub use crate::error::ConvertError;
pub use crate::graph::Graph;
pub use crate::mapping::{ClassMapping, ProductType, TypeMappings, VenueType};
pub use crate::model::{Agent, Contribution, Manifestation, Node, ResearchProduct, Role, Venue};
pub use crate::record::{parse_records, InputRecord};
pub use crate::vocab::{OC_META_BASE, SKG_IF_CONTEXT, SKG_IF_SANDBOX};
