use crate::output::print_json;
use anyhow::bail;
use rulekit_core::{
    config::WarnLevel,
    corpus::{CheckIssue, IssueLevel},
    registry::default_registry,
};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CheckReport {
    issues: Vec<CheckIssue>,
    config_warnings: Vec<rulekit_core::config::ConfigWarning>,
    ok: bool,
}

pub fn run(root: &Path, rules_dir: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let (config, corpus) = super::load_context(root, rules_dir)?;
    let registry = default_registry();

    let issues = corpus.check(&registry);
    let config_warnings = config.validate(&registry, &corpus);

    let error_count = issues
        .iter()
        .filter(|i| i.level == IssueLevel::Error)
        .count()
        + config_warnings
            .iter()
            .filter(|w| w.level == WarnLevel::Error)
            .count();

    if json {
        print_json(&CheckReport {
            ok: error_count == 0,
            issues,
            config_warnings,
        })?;
    } else {
        if issues.is_empty() && config_warnings.is_empty() {
            println!("Corpus OK: {} documents, no issues.", corpus.len());
        }
        for issue in &issues {
            println!("{}: {}", issue.level, issue.message);
        }
        for warning in &config_warnings {
            let level = match warning.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("{level}: config: {}", warning.message);
        }
    }

    if error_count > 0 {
        bail!("{error_count} integrity error(s)");
    }
    Ok(())
}
