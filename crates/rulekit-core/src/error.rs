use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulekitError {
    #[error("rule document not found: {0}")]
    DocumentNotFound(String),

    #[error("invalid document id '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidDocId(String),

    #[error("no dependency manifest found under {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed front matter in '{id}': {source}")]
    FrontMatter {
        id: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("rules directory not found: {}", .0.display())]
    RulesDirNotFound(PathBuf),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RulekitError>;
