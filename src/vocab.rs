//! Vocabulary definitions for SKG-IF output
//!
//! Namespaces used when rewriting OCDM identifiers and the fixed
//! `@context` that heads every generated document.

/// Namespace that `omid:` tokens are rewritten into
pub const OC_META_BASE: &str = "https://w3id.org/oc/meta/";

/// Shared SKG-IF JSON-LD context
pub const SKG_IF_CONTEXT: &str = "https://w3id.org/skg-if/context/skg-if.json";

/// OpenCitations sandbox namespace, used as both `@base` and `skg:`
pub const SKG_IF_SANDBOX: &str = "https://w3id.org/skg-if/sandbox/oc/";

/// FaBiO vocabulary, where manifestation classes are defined
pub const FABIO_NS: &str = "http://purl.org/spar/fabio";

/// Scheme of the canonical identifier token
pub const OMID_SCHEME: &str = "omid";

/// Separator between entries of author/editor/publisher lists
pub const CONTRIBUTOR_SEPARATOR: &str = "; ";

/// Build the two-part `@context` of an output document
pub fn context(vocabulary: &str, sandbox_base: &str) -> serde_json::Value {
    serde_json::json!([
        vocabulary,
        {
            "@base": sandbox_base,
            "skg": sandbox_base
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context() {
        let ctx = context(SKG_IF_CONTEXT, SKG_IF_SANDBOX);
        assert_eq!(ctx[0], SKG_IF_CONTEXT);
        assert_eq!(ctx[1]["@base"], SKG_IF_SANDBOX);
        assert_eq!(ctx[1]["skg"], SKG_IF_SANDBOX);
    }
}
