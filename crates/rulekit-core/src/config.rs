use crate::corpus::Corpus;
use crate::error::Result;
use crate::io;
use crate::paths;
use crate::technology::Technology;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project-level configuration, stored as `.rulekit.yaml` at the root.
/// Every field is optional; a missing file means defaults throughout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Corpus override directory, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_dir: Option<String>,

    /// Technology ids excluded from detection output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disable: Vec<String>,

    /// Document ids `apply` materializes even without a matching technology.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub always_include: Vec<String>,
}

impl Config {
    /// Load `.rulekit.yaml`, or defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        io::atomic_write(&paths::config_path(root), yaml.as_bytes())
    }

    /// Cross-check config references against the registry and corpus.
    pub fn validate(&self, registry: &[Technology], corpus: &Corpus) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for id in &self.disable {
            if !registry.iter().any(|t| t.id == id) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("disable lists unknown technology '{id}'"),
                });
            }
        }

        for id in &self.always_include {
            if !corpus.contains(id) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("always_include lists unknown document '{id}'"),
                });
            }
        }

        warnings
    }

    /// True if detection output should omit this technology.
    pub fn is_disabled(&self, technology_id: &str) -> bool {
        self.disable.iter().any(|d| d == technology_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_registry;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.rules_dir.is_none());
        assert!(config.disable.is_empty());
        assert!(config.always_include.is_empty());
    }

    #[test]
    fn save_and_reload() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            rules_dir: Some("team-rules".to_string()),
            disable: vec!["zod".to_string()],
            always_include: vec!["general".to_string()],
        };
        config.save(dir.path()).unwrap();
        let back = Config::load(dir.path()).unwrap();
        assert_eq!(back.rules_dir.as_deref(), Some("team-rules"));
        assert_eq!(back.disable, vec!["zod"]);
    }

    #[test]
    fn validate_flags_unknown_technology() {
        let config = Config {
            disable: vec!["not-a-tech".to_string()],
            ..Default::default()
        };
        let warnings = config.validate(&default_registry(), &Corpus::builtin());
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Warning && w.message.contains("not-a-tech")));
    }

    #[test]
    fn validate_flags_unknown_document_as_error() {
        let config = Config {
            always_include: vec!["no-such-doc".to_string()],
            ..Default::default()
        };
        let warnings = config.validate(&default_registry(), &Corpus::builtin());
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("no-such-doc")));
    }

    #[test]
    fn validate_clean_config_is_quiet() {
        let config = Config {
            disable: vec!["zod".to_string()],
            always_include: vec!["general".to_string()],
            ..Default::default()
        };
        let warnings = config.validate(&default_registry(), &Corpus::builtin());
        assert!(warnings.is_empty());
    }

    #[test]
    fn is_disabled() {
        let config = Config {
            disable: vec!["zod".to_string()],
            ..Default::default()
        };
        assert!(config.is_disabled("zod"));
        assert!(!config.is_disabled("react"));
    }
}
