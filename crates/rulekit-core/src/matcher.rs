//! Dependency-name matching against the technology registry.
//!
//! A pure, total function: a set of dependency names in, the matched
//! technologies out. No match is an empty result, never an error.

use crate::technology::{Priority, Technology};
use serde::Serialize;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// TechnologyMatch (output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct TechnologyMatch {
    pub technology: String,
    pub label: String,
    pub priority: Priority,
    /// Dependency names that triggered the match, sorted.
    pub matched_dependencies: Vec<String>,
    /// Rule document ids associated with the technology, in registry order.
    pub documents: Vec<String>,
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

pub struct Matcher<'a> {
    registry: &'a [Technology],
}

impl<'a> Matcher<'a> {
    pub fn new(registry: &'a [Technology]) -> Self {
        Self { registry }
    }

    /// Match a set of dependency names against the registry.
    ///
    /// Input set semantics make the result order-independent and duplicate-
    /// insensitive; output is sorted by technology id for stable display,
    /// which carries no precedence meaning.
    pub fn match_dependencies(&self, deps: &BTreeSet<String>) -> Vec<TechnologyMatch> {
        let mut matches: Vec<TechnologyMatch> = self
            .registry
            .iter()
            .filter_map(|tech| {
                let hits = tech.matched(deps.iter().map(String::as_str));
                if hits.is_empty() {
                    return None;
                }
                Some(TechnologyMatch {
                    technology: tech.id.to_string(),
                    label: tech.label.to_string(),
                    priority: tech.priority,
                    matched_dependencies: hits,
                    documents: tech.documents.iter().map(|d| d.to_string()).collect(),
                })
            })
            .collect();
        matches.sort_by(|a, b| a.technology.cmp(&b.technology));
        matches
    }

    /// Convenience over an unordered name list (duplicates collapse).
    pub fn match_names<I, S>(&self, names: I) -> Vec<TechnologyMatch>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let deps: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        self.match_dependencies(&deps)
    }
}

/// The union of document ids across matches, first-mention order preserved.
pub fn matched_documents(matches: &[TechnologyMatch]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut docs = Vec::new();
    for m in matches {
        for doc in &m.documents {
            if seen.insert(doc.clone()) {
                docs.push(doc.clone());
            }
        }
    }
    docs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
