//! Resource Catalog — learning links attached to skills a candidate lacks.
//!
//! The catalog is an ordered list of `(skill, bundle)` pairs. Lookup returns
//! the first entry whose lower-cased skill name is contained in the
//! lower-cased fragment, so enumeration order decides between overlapping
//! keys (e.g. "Java" is listed before "JavaScript" and wins for "javascript").
//!
//! Constructed once at startup and injected into the engine; there is no
//! mutation API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub websites: Vec<String>,
    pub youtube: String,
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read resource file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk entry shape: `{"skill": "...", "websites": [...], "youtube": "..."}`.
#[derive(Debug, Deserialize)]
struct ResourceEntry {
    skill: String,
    #[serde(flatten)]
    resources: ResourceBundle,
}

#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    entries: Vec<(String, ResourceBundle)>,
}

const BUILTIN_RESOURCES: &[(&str, &str, &str)] = &[
    (
        "React",
        "https://react.dev/learn",
        "https://www.youtube.com/watch?v=bMknfKXIFA8",
    ),
    (
        "Python",
        "https://www.python.org/about/gettingstarted/",
        "https://www.youtube.com/watch?v=K5KVEU3aaeQ",
    ),
    (
        "Data Analysis",
        "https://www.geeksforgeeks.org/data-analysis/data-analysis-tutorial/",
        "https://www.youtube.com/watch?v=JG2gXPo-Z-E",
    ),
    (
        "HTML",
        "https://developer.mozilla.org/en-US/docs/Learn/HTML",
        "https://www.youtube.com/watch?v=kUMe1FH4CHE",
    ),
    (
        "CSS",
        "https://web.dev/learn/css",
        "https://www.youtube.com/watch?v=OXGznpKZ_sA",
    ),
    (
        "Flask",
        "https://flask.palletsprojects.com/en/stable/quickstart/",
        "https://www.youtube.com/watch?v=Z1RJmh_OqeA",
    ),
    (
        "Java",
        "https://dev.java/learn/",
        "https://www.youtube.com/watch?v=grEKMHGYCs4",
    ),
    (
        "SQL",
        "https://www.w3schools.com/sql/",
        "https://www.youtube.com/watch?v=HXV3zeQKqGY",
    ),
    (
        "Software Testing",
        "https://www.geeksforgeeks.org/software-testing-basics/",
        "https://www.youtube.com/watch?v=sO8eSa_2jOg",
    ),
    (
        "JavaScript",
        "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide",
        "https://www.youtube.com/watch?v=PkZNo7MFNFg",
    ),
    (
        "Project Management",
        "https://www.pmi.org/basics-of-project-management",
        "https://www.youtube.com/watch?v=z4_2yA4_kfs",
    ),
    (
        "MS-Excel",
        "https://support.microsoft.com/en-us/excel",
        "https://www.youtube.com/watch?v=Vl0H-qTclOg",
    ),
    (
        "Marketing",
        "https://neilpatel.com/what-is-digital-marketing/",
        "https://www.youtube.com/watch?v=nU-IIXBWlS4",
    ),
    (
        "English Proficiency",
        "https://www.duolingo.com/",
        "https://www.youtube.com/watch?v=Gcyo4-s_cW4",
    ),
];

impl ResourceCatalog {
    pub fn new(entries: Vec<(String, ResourceBundle)>) -> Self {
        Self { entries }
    }

    /// The default resource set shipped with the service.
    pub fn builtin() -> Self {
        let entries = BUILTIN_RESOURCES
            .iter()
            .map(|(skill, website, youtube)| {
                (
                    skill.to_string(),
                    ResourceBundle {
                        websites: vec![website.to_string()],
                        youtube: youtube.to_string(),
                    },
                )
            })
            .collect();
        Self::new(entries)
    }

    /// Reads an alternate resource set from a JSON array, keeping file order.
    pub fn from_json_file(path: &Path) -> Result<Self, ResourceError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ResourceError> {
        let entries: Vec<ResourceEntry> = serde_json::from_str(raw)?;
        Ok(Self::new(
            entries
                .into_iter()
                .map(|e| (e.skill, e.resources))
                .collect(),
        ))
    }

    /// First bundle whose skill name occurs in `fragment`, case-insensitively.
    pub fn lookup(&self, fragment: &str) -> Option<&ResourceBundle> {
        let fragment = fragment.to_lowercase();
        self.entries
            .iter()
            .find(|(skill, _)| fragment.contains(&skill.to_lowercase()))
            .map(|(_, bundle)| bundle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_has_all_entries() {
        assert_eq!(ResourceCatalog::builtin().len(), 14);
    }

    #[test]
    fn test_lookup_is_case_insensitive_substring() {
        let catalog = ResourceCatalog::builtin();
        let bundle = catalog.lookup("advanced python").unwrap();
        assert_eq!(bundle.youtube, "https://www.youtube.com/watch?v=K5KVEU3aaeQ");

        let bundle = catalog.lookup("ms-excel").unwrap();
        assert_eq!(bundle.websites, vec!["https://support.microsoft.com/en-us/excel"]);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        // "Java" precedes "JavaScript" in enumeration order
        let catalog = ResourceCatalog::builtin();
        let bundle = catalog.lookup("javascript").unwrap();
        assert_eq!(bundle.websites, vec!["https://dev.java/learn/"]);
    }

    #[test]
    fn test_lookup_miss() {
        let catalog = ResourceCatalog::builtin();
        assert!(catalog.lookup("kubernetes").is_none());
    }

    #[test]
    fn test_key_longer_than_fragment_does_not_match() {
        let catalog = ResourceCatalog::builtin();
        assert!(catalog.lookup("data").is_none());
    }

    #[test]
    fn test_from_json_preserves_order() {
        let raw = r#"[
            {"skill": "Script", "websites": ["https://a.example"], "youtube": "https://yt.example/a"},
            {"skill": "JavaScript", "websites": ["https://b.example"], "youtube": "https://yt.example/b"}
        ]"#;
        let catalog = ResourceCatalog::from_json(raw).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.lookup("javascript").unwrap().youtube,
            "https://yt.example/a"
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"skill": "Rust", "websites": ["https://doc.rust-lang.org/book/"], "youtube": "https://yt.example/rust"}]"#,
        )
        .unwrap();

        let catalog = ResourceCatalog::from_json_file(file.path()).unwrap();
        assert!(catalog.lookup("rust").is_some());
        assert!(catalog.lookup("python").is_none());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = ResourceCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, ResourceError::Parse(_)));
    }
}
