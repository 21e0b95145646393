pub mod apply;
pub mod check;
pub mod detect;
pub mod init;
pub mod list;
pub mod show;

use anyhow::Context;
use rulekit_core::{config::Config, corpus::Corpus};
use std::path::Path;

/// Load config and corpus with the shared override precedence:
/// `--rules-dir` flag, then `.rulekit.yaml` `rules_dir` (relative to root),
/// then the corpus's own layering.
pub fn load_context(root: &Path, rules_dir: Option<&Path>) -> anyhow::Result<(Config, Corpus)> {
    let config = Config::load(root).context("failed to load .rulekit.yaml")?;
    let from_config = config.rules_dir.as_ref().map(|d| root.join(d));
    let override_dir = rules_dir
        .map(Path::to_path_buf)
        .or(from_config);
    let corpus = Corpus::load(root, override_dir.as_deref()).context("failed to load corpus")?;
    Ok((config, corpus))
}
