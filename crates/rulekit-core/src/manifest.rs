//! Dependency manifest parsing.
//!
//! rulekit does not own the manifest format — it reads an external project's
//! `package.json` and reduces it to name/version pairs. Declarations are
//! read-only input to the matcher and are never written back.

use crate::error::{Result, RulekitError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A declared dependency: name and version requirement as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

/// The subset of `package.json` rulekit cares about. Unknown fields are
/// ignored; all dependency sections participate in detection.
#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "optionalDependencies")]
    optional_dependencies: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse manifest content into declarations, sorted by name. A name declared
/// in several sections collapses to its first (runtime-first) occurrence.
pub fn parse_manifest(path: &Path, content: &str) -> Result<Vec<Dependency>> {
    let pkg: PackageJson =
        serde_json::from_str(content).map_err(|source| RulekitError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut merged: BTreeMap<String, String> = BTreeMap::new();
    for section in [
        pkg.dependencies,
        pkg.dev_dependencies,
        pkg.peer_dependencies,
        pkg.optional_dependencies,
    ] {
        for (name, version) in section {
            merged.entry(name).or_insert(version);
        }
    }

    Ok(merged
        .into_iter()
        .map(|(name, version)| Dependency { name, version })
        .collect())
}

/// Load declarations from `root/package.json`.
pub fn load(root: &Path) -> Result<Vec<Dependency>> {
    let path = paths::manifest_path(root);
    if !path.exists() {
        return Err(RulekitError::ManifestNotFound(root.to_path_buf()));
    }
    let content = std::fs::read_to_string(&path)?;
    parse_manifest(&path, &content)
}

/// Load declarations from an explicit manifest file.
pub fn load_file(path: &Path) -> Result<Vec<Dependency>> {
    if !path.exists() {
        return Err(RulekitError::ManifestNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_manifest(path, &content)
}

/// Collapse declarations to the name set the matcher consumes.
pub fn dependency_names(deps: &[Dependency]) -> BTreeSet<String> {
    deps.iter().map(|d| d.name.clone()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
        "name": "demo-app",
        "version": "1.0.0",
        "dependencies": {
            "react": "^19.0.0",
            "@react-router/node": "^7.1.1"
        },
        "devDependencies": {
            "@react-router/dev": "^7.1.1",
            "tailwindcss": "^4.0.0",
            "typescript": "^5.7.2"
        }
    }"#;

    #[test]
    fn parses_all_sections() {
        let deps = parse_manifest(Path::new("package.json"), MANIFEST).unwrap();
        let names = dependency_names(&deps);
        assert!(names.contains("react"));
        assert!(names.contains("@react-router/dev"));
        assert!(names.contains("tailwindcss"));
        assert_eq!(deps.len(), 5);
    }

    #[test]
    fn versions_preserved_verbatim() {
        let deps = parse_manifest(Path::new("package.json"), MANIFEST).unwrap();
        let react = deps.iter().find(|d| d.name == "react").unwrap();
        assert_eq!(react.version, "^19.0.0");
    }

    #[test]
    fn duplicate_across_sections_collapses() {
        let content = r#"{
            "dependencies": { "react": "^19.0.0" },
            "devDependencies": { "react": "^18.0.0" }
        }"#;
        let deps = parse_manifest(Path::new("package.json"), content).unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].version, "^19.0.0");
    }

    #[test]
    fn missing_sections_yield_empty() {
        let deps = parse_manifest(Path::new("package.json"), r#"{"name": "x"}"#).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_manifest(Path::new("package.json"), "{ nope").unwrap_err();
        assert!(matches!(err, RulekitError::ManifestParse { .. }));
    }

    #[test]
    fn load_missing_manifest_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, RulekitError::ManifestNotFound(_)));
    }

    #[test]
    fn load_reads_from_root() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
        let deps = load(dir.path()).unwrap();
        assert_eq!(deps.len(), 5);
    }
}
