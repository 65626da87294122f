//! Domain keyword lexicon — configuration data, not logic. New domains are
//! added by editing the data file, never by touching the scorers.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Keyword sets compiled into the binary; overridable via `LEXICON_PATH`.
const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.json");

/// Maps an interview domain to the vocabulary a strong answer is expected to
/// draw on. Phrases are stored lowercase and matched as case-insensitive
/// substrings of the response.
#[derive(Debug, Clone)]
pub struct Lexicon {
    domains: HashMap<String, Vec<String>>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self {
            domains: serde_json::from_str(BUILTIN_LEXICON)
                .expect("embedded lexicon data is valid JSON"),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let domains = serde_json::from_str(&raw)
            .with_context(|| format!("Lexicon file {} is not valid JSON", path.display()))?;
        Ok(Self { domains })
    }

    /// Returns the configured keywords for a domain, or an empty slice for any
    /// unknown domain. Unknown domains are never an error: scoring proceeds
    /// with a zero keyword component.
    pub fn keywords_for(&self, domain: &str) -> &[String] {
        self.domains.get(domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Configured domain names, sorted for stable output.
    pub fn domains(&self) -> Vec<String> {
        let mut names: Vec<String> = self.domains.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon_has_four_domains() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.domain_count(), 4);
        for domain in [
            "Software Development",
            "Data Science",
            "Digital Marketing",
            "Finance",
        ] {
            assert!(
                !lexicon.keywords_for(domain).is_empty(),
                "{domain} has no keywords"
            );
        }
    }

    #[test]
    fn test_unknown_domain_yields_empty_set() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.keywords_for("Underwater Basket Weaving").is_empty());
        assert!(lexicon.keywords_for("").is_empty());
    }

    #[test]
    fn test_domain_lookup_is_exact() {
        // The domain identifier itself is matched exactly; only keyword
        // matching inside responses is case-insensitive.
        let lexicon = Lexicon::builtin();
        assert!(lexicon.keywords_for("software development").is_empty());
    }

    #[test]
    fn test_domains_are_sorted() {
        let lexicon = Lexicon::builtin();
        let domains = lexicon.domains();
        let mut sorted = domains.clone();
        sorted.sort();
        assert_eq!(domains, sorted);
    }

    #[test]
    fn test_from_path_loads_override_file() {
        use std::io::Write as _;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Gardening": ["soil", "pruning"]}}"#).unwrap();

        let lexicon = Lexicon::from_path(file.path()).unwrap();
        assert_eq!(lexicon.keywords_for("Gardening").len(), 2);
        assert!(lexicon.keywords_for("Software Development").is_empty());
    }

    #[test]
    fn test_from_path_rejects_malformed_file() {
        use std::io::Write as _;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(Lexicon::from_path(file.path()).is_err());
    }
}
