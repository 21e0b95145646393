use crate::output::print_json;
use anyhow::Context;
use rulekit_core::{io, manifest, paths, registry::default_registry, report};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ApplyReport {
    target_dir: String,
    written: Vec<String>,
    skipped: Vec<String>,
}

/// Detect technologies and materialize the selected rule documents into
/// `.ai/rules/` so assistants pick them up from the working tree.
pub fn run(root: &Path, rules_dir: Option<&Path>, force: bool, json: bool) -> anyhow::Result<()> {
    let (config, corpus) = super::load_context(root, rules_dir)?;
    let deps = manifest::load(root).context("failed to read dependency manifest")?;
    let registry = default_registry();
    let detection = report::detect(root, &deps, &registry, &corpus, &config);

    // Selection: detection result, then config pins, then always_apply docs.
    let mut selected: Vec<String> = detection.documents.clone();
    for id in &config.always_include {
        if !selected.contains(id) {
            selected.push(id.clone());
        }
    }
    for doc in corpus.always_applied() {
        if !selected.contains(&doc.id) {
            selected.push(doc.id.clone());
        }
    }

    let target = paths::ai_rules_dir(root);
    io::ensure_dir(&target)?;

    let mut written = Vec::new();
    let mut skipped = Vec::new();
    for id in &selected {
        let doc = corpus
            .get(id)
            .with_context(|| format!("document '{id}' not in corpus"))?;
        let path = target.join(format!("{id}.md"));
        let content = doc.to_markdown();
        if force {
            io::atomic_write(&path, content.as_bytes())?;
            written.push(id.clone());
        } else if io::write_if_missing(&path, content.as_bytes())? {
            written.push(id.clone());
        } else {
            skipped.push(id.clone());
        }
    }

    // Materialized rules are derived output, keep them out of version control.
    io::ensure_gitignore_entry(root, &format!("{}/", paths::AI_RULES_DIR))?;

    if json {
        return print_json(&ApplyReport {
            target_dir: target.display().to_string(),
            written,
            skipped,
        });
    }

    println!("Applying rules to {}", target.display());
    for id in &written {
        println!("  created: {id}.md");
    }
    for id in &skipped {
        println!("  exists:  {id}.md (use --force to overwrite)");
    }
    if written.is_empty() && skipped.is_empty() {
        println!("  nothing to apply — no technologies detected");
    }
    Ok(())
}
