use crate::output::{print_json, print_table};
use anyhow::Context;
use rulekit_core::{manifest, registry::default_registry, report};
use std::path::Path;

pub fn run(
    root: &Path,
    manifest_path: Option<&Path>,
    rules_dir: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let (config, corpus) = super::load_context(root, rules_dir)?;

    let deps = match manifest_path {
        Some(path) => manifest::load_file(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?,
        None => manifest::load(root).context("failed to read dependency manifest")?,
    };

    let registry = default_registry();
    let report = report::detect(root, &deps, &registry, &corpus, &config);

    if json {
        return print_json(&report);
    }

    if report.technologies.is_empty() {
        println!(
            "No known technologies among {} dependencies.",
            report.dependency_count
        );
        return Ok(());
    }

    println!(
        "Detected {} technologies from {} dependencies:\n",
        report.technologies.len(),
        report.dependency_count
    );

    let rows: Vec<Vec<String>> = report
        .technologies
        .iter()
        .map(|m| {
            vec![
                m.label.clone(),
                m.priority.to_string(),
                m.matched_dependencies.join(", "),
                m.documents.join(", "),
            ]
        })
        .collect();
    print_table(&["TECHNOLOGY", "PRIORITY", "MATCHED", "DOCUMENTS"], &rows);

    println!("\nRule documents to load:");
    for doc in &report.documents {
        println!("  {doc}");
    }
    println!("\nRun 'rulekit apply' to materialize them into .ai/rules/");

    Ok(())
}
