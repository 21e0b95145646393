//! The rule document corpus.
//!
//! Documents come from layered sources: the builtin corpus embedded in the
//! binary, an optional user-level overlay under the home directory, an
//! optional project-local `rules/` directory, and an explicit override
//! directory. Later layers replace earlier documents with the same id.

use crate::document::RuleDocument;
use crate::error::{Result, RulekitError};
use crate::paths;
use crate::technology::Technology;
use rust_embed::Embed;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

#[derive(Embed)]
#[folder = "rules/"]
struct BuiltinRules;

// ---------------------------------------------------------------------------
// Integrity issues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLevel {
    Warning,
    Error,
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueLevel::Warning => write!(f, "warning"),
            IssueLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckIssue {
    pub level: IssueLevel,
    pub message: String,
}

impl CheckIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Corpus {
    docs: BTreeMap<String, RuleDocument>,
    /// Problems found while loading (malformed front matter, bad ids).
    /// Kept so `check` can report them; lookups simply miss those ids.
    load_issues: Vec<CheckIssue>,
}

impl Corpus {
    /// The corpus embedded in the binary.
    pub fn builtin() -> Self {
        let mut corpus = Self {
            docs: BTreeMap::new(),
            load_issues: Vec::new(),
        };
        for file in <BuiltinRules as Embed>::iter() {
            let Some(content) = <BuiltinRules as Embed>::get(&file) else {
                continue;
            };
            let text = String::from_utf8_lossy(&content.data).into_owned();
            corpus.insert_file(&file, &text, "builtin");
        }
        corpus
    }

    /// Layered load: builtin, then user overlay, then project `rules/`,
    /// then `override_dir` (which must exist when given).
    pub fn load(root: &Path, override_dir: Option<&Path>) -> Result<Self> {
        let mut corpus = Self::builtin();

        // User overlay is best-effort: no home dir means no overlay.
        if let Ok(user_dir) = paths::user_rules_dir() {
            if user_dir.is_dir() {
                corpus.overlay_dir(&user_dir)?;
            }
        }

        let project_dir = paths::project_rules_dir(root);
        if project_dir.is_dir() {
            corpus.overlay_dir(&project_dir)?;
        }

        if let Some(dir) = override_dir {
            if !dir.is_dir() {
                return Err(RulekitError::RulesDirNotFound(dir.to_path_buf()));
            }
            corpus.overlay_dir(dir)?;
        }

        Ok(corpus)
    }

    /// Merge every `*.md` in `dir` into the corpus, replacing same-id
    /// documents from earlier layers. Returns the number of files read.
    pub fn overlay_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut read = 0usize;
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let content = std::fs::read_to_string(entry.path())?;
            if self.insert_file(&name, &content, &dir.display().to_string()) {
                read += 1;
            }
        }
        Ok(read)
    }

    /// Parse and store one file. Returns false for non-documents and for
    /// files recorded as load issues.
    fn insert_file(&mut self, filename: &str, content: &str, source: &str) -> bool {
        let Some(id) = filename.strip_suffix(".md") else {
            return false;
        };
        if let Err(e) = paths::validate_doc_id(id) {
            self.load_issues
                .push(CheckIssue::error(format!("{source}: {e}")));
            return false;
        }
        match RuleDocument::parse(id, content) {
            Ok(doc) => {
                self.docs.insert(id.to_string(), doc);
                true
            }
            Err(e) => {
                self.load_issues
                    .push(CheckIssue::error(format!("{source}: {e}")));
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Result<&RuleDocument> {
        self.docs
            .get(id)
            .ok_or_else(|| RulekitError::DocumentNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    /// All documents, sorted by id.
    pub fn list(&self) -> impl Iterator<Item = &RuleDocument> {
        self.docs.values()
    }

    /// Documents flagged `always_apply`, sorted by id.
    pub fn always_applied(&self) -> impl Iterator<Item = &RuleDocument> {
        self.docs.values().filter(|d| d.meta.always_apply)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Referential integrity between a registry and this corpus.
    ///
    /// Errors: registry references a document that does not exist, plus any
    /// load issue. Warnings: documents nothing references and not flagged
    /// `always_apply` (unreachable through detection).
    pub fn check(&self, registry: &[Technology]) -> Vec<CheckIssue> {
        let mut issues = self.load_issues.clone();

        let mut referenced: std::collections::BTreeSet<&str> = std::collections::BTreeSet::new();
        for tech in registry {
            for doc in &tech.documents {
                referenced.insert(doc);
                if !self.contains(doc) {
                    issues.push(CheckIssue::error(format!(
                        "technology '{}' references missing document '{doc}'",
                        tech.id
                    )));
                }
            }
        }

        for doc in self.docs.values() {
            if !referenced.contains(doc.id.as_str()) && !doc.meta.always_apply {
                issues.push(CheckIssue::warning(format!(
                    "document '{}' is not referenced by any technology and is not always_apply",
                    doc.id
                )));
            }
        }

        issues
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_registry;
    use crate::technology::{Pattern, Priority};
    use tempfile::TempDir;

    #[test]
    fn builtin_corpus_is_nonempty() {
        let corpus = Corpus::builtin();
        assert!(!corpus.is_empty());
        assert!(corpus.contains("react-router"));
        assert!(corpus.contains("tailwindcss"));
    }

    #[test]
    fn builtin_corpus_satisfies_default_registry() {
        let corpus = Corpus::builtin();
        let issues = corpus.check(&default_registry());
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.level == IssueLevel::Error)
            .collect();
        assert!(errors.is_empty(), "integrity errors: {errors:?}");
    }

    #[test]
    fn overlay_replaces_builtin_document() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("tailwindcss.md"),
            "---\ndescription: Local override.\n---\n\nOverride body.\n",
        )
        .unwrap();
        let mut corpus = Corpus::builtin();
        let read = corpus.overlay_dir(dir.path()).unwrap();
        assert_eq!(read, 1);
        let doc = corpus.get("tailwindcss").unwrap();
        assert_eq!(doc.meta.description.as_deref(), Some("Local override."));
    }

    #[test]
    fn overlay_skips_non_markdown() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let mut corpus = Corpus::builtin();
        let before = corpus.len();
        let read = corpus.overlay_dir(dir.path()).unwrap();
        assert_eq!(read, 0);
        assert_eq!(corpus.len(), before);
    }

    #[test]
    fn malformed_frontmatter_becomes_load_issue() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("broken.md"),
            "---\ndescription: [unclosed\n---\nbody",
        )
        .unwrap();
        let mut corpus = Corpus::builtin();
        corpus.overlay_dir(dir.path()).unwrap();
        assert!(!corpus.contains("broken"));
        let issues = corpus.check(&[]);
        assert!(issues
            .iter()
            .any(|i| i.level == IssueLevel::Error && i.message.contains("broken")));
    }

    #[test]
    fn invalid_doc_id_becomes_load_issue() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Bad_Name.md"), "body").unwrap();
        let mut corpus = Corpus::builtin();
        corpus.overlay_dir(dir.path()).unwrap();
        let issues = corpus.check(&[]);
        assert!(issues.iter().any(|i| i.message.contains("Bad_Name")));
    }

    #[test]
    fn missing_reference_is_error() {
        let corpus = Corpus::builtin();
        let registry = vec![Technology {
            id: "ghost",
            label: "Ghost",
            priority: Priority::Low,
            patterns: vec![Pattern::parse("ghost")],
            documents: vec!["no-such-document"],
        }];
        let issues = corpus.check(&registry);
        assert!(issues
            .iter()
            .any(|i| i.level == IssueLevel::Error && i.message.contains("no-such-document")));
    }

    #[test]
    fn unreferenced_document_is_warning() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("orphan.md"), "# Orphan\n").unwrap();
        let mut corpus = Corpus::builtin();
        corpus.overlay_dir(dir.path()).unwrap();
        let issues = corpus.check(&default_registry());
        assert!(issues
            .iter()
            .any(|i| i.level == IssueLevel::Warning && i.message.contains("orphan")));
    }

    #[test]
    fn get_missing_document_is_not_found() {
        let corpus = Corpus::builtin();
        assert!(matches!(
            corpus.get("missing"),
            Err(RulekitError::DocumentNotFound(_))
        ));
    }

    #[test]
    fn load_with_missing_override_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = Corpus::load(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, RulekitError::RulesDirNotFound(_)));
    }

    #[test]
    fn load_picks_up_project_rules_dir() {
        let dir = TempDir::new().unwrap();
        let rules = dir.path().join("rules");
        std::fs::create_dir_all(&rules).unwrap();
        std::fs::write(rules.join("team-style.md"), "# Team style\n").unwrap();
        let corpus = Corpus::load(dir.path(), None).unwrap();
        assert!(corpus.contains("team-style"));
    }
}
