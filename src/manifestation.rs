//! Manifestation and venue construction
//!
//! Builds the publication instance of a record (classification, dates,
//! bibliographic locators) and, when the record names a venue, the venue
//! entity the manifestation points at.

use tracing::debug;

use crate::date;
use crate::error::ConvertError;
use crate::id::{extract_identifiers, parse_labelled, resolve_canonical};
use crate::mapping::{TypeMappings, VenueType};
use crate::model::{
    Biblio, Contribution, Dates, EntityType, Labels, Manifestation, ManifestationType, Pages,
    Venue,
};
use crate::record::InputRecord;

/// Separator between first and last page
const PAGE_SEPARATOR: char = '-';

/// Output of [`build_manifestation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltManifestation {
    pub manifestation: Manifestation,
    pub venue: Option<Venue>,
}

/// Build the manifestation of a record and its venue, if any
///
/// `editors` are folded into the venue only for book venues; `publishers`
/// are folded into any venue.
pub fn build_manifestation(
    record: &InputRecord,
    editors: &[Contribution],
    publishers: &[Contribution],
    mappings: &TypeMappings,
) -> Result<BuiltManifestation, ConvertError> {
    let class = mappings.class_for(&record.record_type)?;

    let mut manifestation = Manifestation {
        manifestation_type: ManifestationType {
            class: class.class.clone(),
            labels: Labels {
                en: record.record_type.clone(),
            },
            defined_in: class.defined_in.clone(),
        },
        identifiers: extract_identifiers(&record.id)?,
        dates: None,
        biblio: None,
    };

    if !record.pub_date.is_empty() {
        let publication = date::normalize(&record.pub_date)?;
        debug!(pub_date = %record.pub_date, %publication, "Normalized publication date");
        manifestation.dates = Some(Dates { publication });
    }

    let mut venue = None;

    if record.has_biblio() {
        let mut biblio = Biblio::default();

        if !record.issue.is_empty() {
            biblio.issue = Some(record.issue.clone());
        }
        if !record.volume.is_empty() {
            biblio.volume = Some(record.volume.clone());
        }
        if !record.page.is_empty() {
            biblio.pages = Some(split_pages(&record.page)?);
        }
        if !record.venue.is_empty() {
            let built = build_venue(record, editors, publishers, mappings)?;
            biblio.venue = Some(built.local_identifier.clone());
            venue = Some(built);
        }

        manifestation.biblio = Some(biblio);
    }

    Ok(BuiltManifestation {
        manifestation,
        venue,
    })
}

/// Split a `first-last` page range
///
/// "123-145" -> {first: "123", last: "145"}
pub fn split_pages(raw: &str) -> Result<Pages, ConvertError> {
    let mut parts = raw.split(PAGE_SEPARATOR);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(last), None) => Ok(Pages {
            first: first.to_string(),
            last: last.to_string(),
        }),
        _ => Err(ConvertError::MalformedPageRange(raw.to_string())),
    }
}

fn build_venue(
    record: &InputRecord,
    editors: &[Contribution],
    publishers: &[Contribution],
    mappings: &TypeMappings,
) -> Result<Venue, ConvertError> {
    let labelled = parse_labelled(&record.venue)?;
    let venue_type = mappings.venue_type_for(&record.record_type)?;

    let mut contributions = Vec::new();
    if venue_type == VenueType::Book {
        contributions.extend_from_slice(editors);
    }
    contributions.extend_from_slice(publishers);

    Ok(Venue {
        local_identifier: resolve_canonical(labelled.identifiers, &mappings.canonical_base)?,
        entity_type: EntityType::Venue,
        title: labelled.name.to_string(),
        venue_type,
        identifiers: extract_identifiers(labelled.identifiers)?,
        contributions,
    })
}
