use anyhow::Context;
use rulekit_core::{io, paths};
use std::path::Path;

const DEFAULT_CONFIG: &str = "\
# rulekit project configuration. Every field is optional.
#
# rules_dir: team-rules    # corpus override directory, relative to this file

# Technology ids excluded from detection output:
disable: []

# Document ids 'apply' materializes even without a matching technology:
always_include: []
";

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing rulekit in: {}", root.display());

    let config_path = paths::config_path(root);
    if io::write_if_missing(&config_path, DEFAULT_CONFIG.as_bytes())
        .context("failed to write .rulekit.yaml")?
    {
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    let rules_target = paths::ai_rules_dir(root);
    io::ensure_dir(&rules_target)
        .with_context(|| format!("failed to create {}", rules_target.display()))?;
    println!("  created: {}/", paths::AI_RULES_DIR);

    io::ensure_gitignore_entry(root, &format!("{}/", paths::AI_RULES_DIR))?;

    println!("\nNext: run 'rulekit detect' to see which rules match this project.");
    Ok(())
}
