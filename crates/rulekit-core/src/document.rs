//! Rule document model and YAML front-matter parsing.
//!
//! A rule document is a Markdown file whose stem is its id. Optional metadata
//! lives between the first pair of `---` delimiters; everything after is the
//! body handed to the assistant verbatim.

use crate::error::{Result, RulekitError};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Metadata extracted from a rule document's YAML front matter.
///
/// Every field is optional: a bare Markdown file is a valid rule document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocMeta {
    /// One-line summary shown in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Attachment hint: file globs this document is relevant to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub globs: Vec<String>,

    /// Load this document regardless of which technologies were detected.
    #[serde(default, skip_serializing_if = "is_false")]
    pub always_apply: bool,
}

fn is_false(v: &bool) -> bool {
    !v
}

/// A rule document: id, metadata, and the Markdown body.
#[derive(Debug, Clone, Serialize)]
pub struct RuleDocument {
    pub id: String,
    pub meta: DocMeta,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Front-matter parsing
// ---------------------------------------------------------------------------

/// Extract the YAML content between the first pair of `---` delimiters.
/// Returns the front matter and the remaining body.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = if let Some(r) = rest.strip_prefix('\n') {
        r
    } else if let Some(r) = rest.strip_prefix("\r\n") {
        r
    } else {
        return None;
    };
    let end = rest.find("\n---")?;
    let body = rest[end + 4..].trim_start_matches(['\r', '\n']);
    Some((&rest[..end], body))
}

impl RuleDocument {
    /// Parse a document from raw file content.
    ///
    /// Missing front matter yields default metadata; malformed YAML is an
    /// error so `check` can surface it instead of silently dropping fields.
    pub fn parse(id: &str, content: &str) -> Result<Self> {
        let (meta, body) = match split_frontmatter(content) {
            Some((fm, body)) => {
                let meta =
                    serde_yaml::from_str(fm).map_err(|source| RulekitError::FrontMatter {
                        id: id.to_string(),
                        source,
                    })?;
                (meta, body.to_string())
            }
            None => (DocMeta::default(), content.to_string()),
        };
        Ok(Self {
            id: id.to_string(),
            meta,
            body,
        })
    }

    /// Reassemble the document as it is written to disk by `apply`.
    pub fn to_markdown(&self) -> String {
        let meta = serde_yaml::to_string(&self.meta).unwrap_or_default();
        if meta.trim() == "{}" || meta.trim().is_empty() {
            return self.body.clone();
        }
        format!("---\n{meta}---\n\n{}", self.body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
