//! Main conversion logic
//!
//! Single pass over the input records, assembling research products,
//! agents and venues into one SKG-IF graph.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info};

use crate::contributor::{self, Extracted};
use crate::error::ConvertError;
use crate::graph::Graph;
use crate::id::{extract_identifiers, resolve_canonical};
use crate::manifestation::build_manifestation;
use crate::mapping::TypeMappings;
use crate::model::{Agent, Contribution, EntityType, Node, ResearchProduct, Role, Titles};
use crate::record::InputRecord;
use crate::vocab::context;

/// Indentation of pretty-printed output
const INDENT: &[u8] = b"    ";

/// Options for conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Record-type tables and output namespaces
    pub mappings: TypeMappings,
}

/// Result of conversion
#[derive(Debug)]
pub struct ConvertResult {
    /// The @graph, in insertion order
    pub graph: Vec<Node>,
    /// The two-part @context
    pub context: Value,
    /// Statistics about the conversion
    pub stats: ConvertStats,
}

/// Statistics from conversion
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertStats {
    /// Number of input records (one research product each)
    pub records: usize,
    /// Number of distinct agents added to the graph
    pub agents: usize,
    /// Number of agents dropped because their URI was already present
    pub agents_deduplicated: usize,
    /// Number of venue nodes
    pub venues: usize,
    /// Number of nodes in the final graph
    pub total_nodes: usize,
}

/// Convert OCDM records into an SKG-IF graph
///
/// The first failing record aborts the whole conversion.
pub fn convert(
    records: &[InputRecord],
    options: &ConvertOptions,
) -> Result<ConvertResult, ConvertError> {
    let mut graph = Graph::new();
    let mut stats = ConvertStats::default();

    for (index, record) in records.iter().enumerate() {
        debug!(index, id = %record.id, record_type = %record.record_type, "Converting record");

        convert_record(record, &options.mappings, &mut graph, &mut stats).map_err(|e| {
            ConvertError::Record {
                index,
                id: record.id.clone(),
                source: Box::new(e),
            }
        })?;
        stats.records += 1;
    }

    let nodes = graph.into_nodes();
    stats.total_nodes = nodes.len();

    info!(
        records = stats.records,
        agents = stats.agents,
        agents_deduplicated = stats.agents_deduplicated,
        venues = stats.venues,
        nodes = stats.total_nodes,
        "Conversion finished"
    );

    Ok(ConvertResult {
        graph: nodes,
        context: context(
            &options.mappings.context_vocabulary,
            &options.mappings.sandbox_base,
        ),
        stats,
    })
}

/// Convert one record and append its nodes to the graph
///
/// Nodes are appended as product, then newly seen agents, then venue.
fn convert_record(
    record: &InputRecord,
    mappings: &TypeMappings,
    graph: &mut Graph,
    stats: &mut ConvertStats,
) -> Result<(), ConvertError> {
    let base = &mappings.canonical_base;

    let local_identifier = resolve_canonical(&record.id, base)?;
    let identifiers = extract_identifiers(&record.id)?;

    let authors = contributor::extract(&record.authors(), Role::Author, base)?;
    let editors = contributor::extract(&record.editors(), Role::Editor, base)?;
    let publishers = contributor::extract(&record.publishers(), Role::Publisher, base)?;

    let built = build_manifestation(
        record,
        &editors.contributions,
        &publishers.contributions,
        mappings,
    )?;

    let (contributions, agents) = concat([authors, editors, publishers]);

    let titles = (!record.title.is_empty()).then(|| Titles {
        none: record.title.clone(),
    });

    graph.push_product(ResearchProduct {
        entity_type: EntityType::Product,
        local_identifier,
        identifiers,
        product_type: mappings.product_type_for(&record.record_type),
        titles,
        contributions,
        manifestations: vec![built.manifestation],
    });

    for agent in agents {
        if graph.insert_agent(agent) {
            stats.agents += 1;
        } else {
            stats.agents_deduplicated += 1;
        }
    }

    if let Some(venue) = built.venue {
        graph.push_venue(venue);
        stats.venues += 1;
    }

    Ok(())
}

/// Concatenate extractions, preserving list order
fn concat<const N: usize>(parts: [Extracted; N]) -> (Vec<Contribution>, Vec<Agent>) {
    parts.into_iter().fold(
        (Vec::new(), Vec::new()),
        |(mut contributions, mut agents), part| {
            contributions.extend(part.contributions);
            agents.extend(part.agents);
            (contributions, agents)
        },
    )
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(rename = "@context")]
    context: &'a Value,
    #[serde(rename = "@graph")]
    graph: &'a [Node],
}

/// Build the complete JSON-LD document from a conversion result
pub fn to_jsonld(result: &ConvertResult) -> Result<Value, ConvertError> {
    Ok(serde_json::to_value(Document {
        context: &result.context,
        graph: &result.graph,
    })?)
}

/// Serialize a conversion result to a JSON-LD string
///
/// Pretty output uses four-space indentation. Non-ASCII characters are
/// written as-is.
pub fn to_json_string(result: &ConvertResult, pretty: bool) -> Result<String, ConvertError> {
    let doc = Document {
        context: &result.context,
        graph: &result.graph,
    };

    if pretty {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        doc.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| {
            ConvertError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    } else {
        Ok(serde_json::to_string(&doc)?)
    }
}
