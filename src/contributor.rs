//! Contributor extraction
//!
//! Turns an author, editor or publisher list into ranked contributions
//! and the agent entities they point at.

use crate::error::ConvertError;
use crate::id::{extract_identifiers, parse_labelled, resolve_canonical, Identifier};
use crate::model::{Agent, Contribution, EntityType, Role};

/// Separator between family and given name in a person's name
const NAME_SEPARATOR: &str = ", ";

/// Contributions and agents extracted from one contributor list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub contributions: Vec<Contribution>,
    pub agents: Vec<Agent>,
}

/// Extract contributions and agents from a list of `Name [ids]` entries
///
/// Empty entries are skipped and do not consume a rank. Agents are not
/// deduplicated here; the graph handles that.
pub fn extract(
    entries: &[&str],
    role: Role,
    canonical_base: &str,
) -> Result<Extracted, ConvertError> {
    let mut extracted = Extracted::default();
    let mut rank = 0;

    for entry in entries.iter().filter(|e| !e.is_empty()) {
        rank += 1;

        let labelled = parse_labelled(entry)?;
        let uri = resolve_canonical(labelled.identifiers, canonical_base)?;
        let identifiers = extract_identifiers(labelled.identifiers)?;

        extracted.contributions.push(Contribution {
            by: uri.clone(),
            role,
            rank: role.is_ranked().then_some(rank),
        });

        extracted
            .agents
            .push(build_agent(uri, identifiers, labelled.name, role));
    }

    Ok(extracted)
}

/// Build an agent whose shape depends on the name and the role
///
/// "Family, Given" is a person; anything else is an organisation for
/// publishers and a generic agent otherwise.
fn build_agent(
    local_identifier: String,
    identifiers: Vec<Identifier>,
    name: &str,
    role: Role,
) -> Agent {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    let mut agent = Agent {
        local_identifier,
        identifiers,
        entity_type: EntityType::Agent,
        given_name: None,
        family_name: None,
        name: None,
    };

    match name.split_once(NAME_SEPARATOR) {
        Some((family, given)) => {
            agent.entity_type = EntityType::Person;
            agent.given_name = non_empty(given);
            agent.family_name = non_empty(family);
        }
        None => {
            if role == Role::Publisher {
                agent.entity_type = EntityType::Organisation;
            }
            agent.name = non_empty(name);
        }
    }

    agent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::OC_META_BASE;
    use serde_json::json;

    #[test]
    fn test_person_author() {
        let extracted = extract(
            &["Smith, John [omid:ra/1 orcid:0000-0001]"],
            Role::Author,
            OC_META_BASE,
        )
        .unwrap();

        assert_eq!(
            extracted.contributions,
            vec![Contribution {
                by: "https://w3id.org/oc/meta/ra/1".to_string(),
                role: Role::Author,
                rank: Some(1),
            }]
        );

        let agent = &extracted.agents[0];
        assert_eq!(agent.entity_type, EntityType::Person);
        assert_eq!(agent.family_name.as_deref(), Some("Smith"));
        assert_eq!(agent.given_name.as_deref(), Some("John"));
        assert_eq!(agent.name, None);
        assert_eq!(
            agent.identifiers,
            vec![
                Identifier::new("omid", "ra/1"),
                Identifier::new("orcid", "0000-0001"),
            ]
        );
    }

    #[test]
    fn test_person_serialization_order() {
        let extracted =
            extract(&["Smith, John [omid:ra/1]"], Role::Author, OC_META_BASE).unwrap();
        let agent = &extracted.agents[0];

        assert_eq!(
            serde_json::to_value(agent).unwrap(),
            json!({
                "local_identifier": "https://w3id.org/oc/meta/ra/1",
                "identifiers": [{"scheme": "omid", "value": "ra/1"}],
                "entity_type": "person",
                "given_name": "John",
                "family_name": "Smith"
            })
        );

        // given_name is written before family_name
        let rendered = serde_json::to_string(agent).unwrap();
        let given = rendered.find("given_name").unwrap();
        let family = rendered.find("family_name").unwrap();
        assert!(given < family);
    }

    #[test]
    fn test_publisher_organisation() {
        let extracted = extract(
            &["Springer Nature [omid:ra/9 crossref:297]"],
            Role::Publisher,
            OC_META_BASE,
        )
        .unwrap();

        assert_eq!(extracted.contributions[0].rank, None);
        assert_eq!(extracted.contributions[0].role, Role::Publisher);
        let agent = &extracted.agents[0];
        assert_eq!(agent.entity_type, EntityType::Organisation);
        assert_eq!(agent.name.as_deref(), Some("Springer Nature"));
    }

    #[test]
    fn test_generic_agent_for_single_name_author() {
        let extracted =
            extract(&["The Consortium [omid:ra/5]"], Role::Author, OC_META_BASE).unwrap();
        assert_eq!(extracted.agents[0].entity_type, EntityType::Agent);
        assert_eq!(extracted.agents[0].name.as_deref(), Some("The Consortium"));
    }

    #[test]
    fn test_empty_name_parts_are_omitted() {
        let extracted = extract(&["Smith,  [omid:ra/1]"], Role::Editor, OC_META_BASE).unwrap();
        let agent = &extracted.agents[0];
        assert_eq!(agent.entity_type, EntityType::Person);
        assert_eq!(agent.family_name.as_deref(), Some("Smith"));
        assert_eq!(agent.given_name, None);
    }

    #[test]
    fn test_name_splits_at_first_separator() {
        let extracted =
            extract(&["Smith, John, Jr. [omid:ra/1]"], Role::Author, OC_META_BASE).unwrap();
        let agent = &extracted.agents[0];
        assert_eq!(agent.family_name.as_deref(), Some("Smith"));
        assert_eq!(agent.given_name.as_deref(), Some("John, Jr."));
    }

    #[test]
    fn test_ranks_skip_empty_entries() {
        let extracted = extract(
            &["", "A, B [omid:ra/1]", "", "C, D [omid:ra/2]"],
            Role::Editor,
            OC_META_BASE,
        )
        .unwrap();

        let ranks: Vec<_> = extracted.contributions.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Some(1), Some(2)]);
        assert_eq!(extracted.agents.len(), 2);
    }

    #[test]
    fn test_empty_list() {
        let extracted = extract(&[""], Role::Author, OC_META_BASE).unwrap();
        assert_eq!(extracted, Extracted::default());
    }

    #[test]
    fn test_malformed_entry() {
        assert!(matches!(
            extract(&["Smith, John"], Role::Author, OC_META_BASE),
            Err(ConvertError::MalformedLabelledValue(_))
        ));
        assert!(matches!(
            extract(&["Smith, John [orcid:0000-0001]"], Role::Author, OC_META_BASE),
            Err(ConvertError::MissingCanonicalId(_))
        ));
    }

    #[test]
    fn test_no_deduplication_within_list() {
        let extracted = extract(
            &["A, B [omid:ra/1]", "A, B [omid:ra/1]"],
            Role::Author,
            OC_META_BASE,
        )
        .unwrap();
        assert_eq!(extracted.agents.len(), 2);
        assert_eq!(extracted.agents[0], extracted.agents[1]);
    }
}
