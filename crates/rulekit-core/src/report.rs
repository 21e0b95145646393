use crate::config::Config;
use crate::corpus::Corpus;
use crate::manifest::{self, Dependency};
use crate::matcher::{matched_documents, Matcher, TechnologyMatch};
use crate::technology::Technology;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// DetectionReport (output)
// ---------------------------------------------------------------------------

/// The result of one detection run, serialized as-is for `--json`.
#[derive(Debug, Serialize)]
pub struct DetectionReport {
    pub root: String,
    pub generated_at: DateTime<Utc>,
    pub dependency_count: usize,
    pub technologies: Vec<TechnologyMatch>,
    /// Union of matched document ids, first mention wins; missing documents
    /// (registry drift the corpus check would flag) are filtered out.
    pub documents: Vec<String>,
}

/// Run the matcher over parsed declarations and assemble a report.
///
/// Technologies listed in `config.disable` are dropped from the output;
/// their documents only appear if another matched technology carries them.
pub fn detect(
    root: &Path,
    deps: &[Dependency],
    registry: &[Technology],
    corpus: &Corpus,
    config: &Config,
) -> DetectionReport {
    let names = manifest::dependency_names(deps);
    let matches: Vec<TechnologyMatch> = Matcher::new(registry)
        .match_dependencies(&names)
        .into_iter()
        .filter(|m| !config.is_disabled(&m.technology))
        .collect();

    let documents = matched_documents(&matches)
        .into_iter()
        .filter(|d| corpus.contains(d))
        .collect();

    DetectionReport {
        root: root.display().to_string(),
        generated_at: Utc::now(),
        dependency_count: names.len(),
        technologies: matches,
        documents,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
