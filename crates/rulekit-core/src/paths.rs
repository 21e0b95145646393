use crate::error::{Result, RulekitError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

/// Project-local directory `apply` materializes selected rules into.
pub const AI_RULES_DIR: &str = ".ai/rules";

/// Project-local corpus overlay directory.
pub const PROJECT_RULES_DIR: &str = "rules";

/// User-level corpus overlay, resolved under the home directory.
pub const USER_RULES_DIR: &str = ".rulekit/rules";

pub const CONFIG_FILE: &str = ".rulekit.yaml";
pub const MANIFEST_FILE: &str = "package.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn ai_rules_dir(root: &Path) -> PathBuf {
    root.join(AI_RULES_DIR)
}

pub fn project_rules_dir(root: &Path) -> PathBuf {
    root.join(PROJECT_RULES_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

pub fn user_rules_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(RulekitError::HomeNotFound)?;
    Ok(home.join(USER_RULES_DIR))
}

// ---------------------------------------------------------------------------
// Document id validation
// ---------------------------------------------------------------------------

static DOC_ID_RE: OnceLock<Regex> = OnceLock::new();

fn doc_id_re() -> &'static Regex {
    DOC_ID_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_doc_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > 64 || !doc_id_re().is_match(id) {
        return Err(RulekitError::InvalidDocId(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_doc_ids() {
        for id in ["react-router", "a", "tailwindcss-4", "x1"] {
            validate_doc_id(id).unwrap_or_else(|_| panic!("expected valid: {id}"));
        }
    }

    #[test]
    fn invalid_doc_ids() {
        for id in [
            "",
            "-starts-with-dash",
            "ends-with-dash-",
            "has spaces",
            "UPPER",
            "a_b",
            "dir/escape",
        ] {
            assert!(validate_doc_id(id).is_err(), "expected invalid: {id}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(config_path(root), PathBuf::from("/tmp/proj/.rulekit.yaml"));
        assert_eq!(manifest_path(root), PathBuf::from("/tmp/proj/package.json"));
        assert_eq!(ai_rules_dir(root), PathBuf::from("/tmp/proj/.ai/rules"));
    }
}
