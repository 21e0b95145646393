use crate::output::{print_json, print_table};
use clap::Subcommand;
use rulekit_core::registry::default_registry;
use serde::Serialize;
use std::path::Path;

#[derive(Subcommand)]
pub enum ListSubcommand {
    /// Registry technologies with their indicator patterns
    Technologies,
    /// Corpus documents (builtin plus overlays)
    Documents,
}

#[derive(Serialize)]
struct TechnologyRow {
    id: String,
    label: String,
    priority: String,
    patterns: Vec<String>,
    documents: Vec<String>,
}

#[derive(Serialize)]
struct DocumentRow {
    id: String,
    always_apply: bool,
    description: String,
}

pub fn run(
    root: &Path,
    subcommand: ListSubcommand,
    rules_dir: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    match subcommand {
        ListSubcommand::Technologies => {
            let rows: Vec<TechnologyRow> = default_registry()
                .iter()
                .map(|t| TechnologyRow {
                    id: t.id.to_string(),
                    label: t.label.to_string(),
                    priority: t.priority.to_string(),
                    patterns: t.patterns.iter().map(|p| p.to_string()).collect(),
                    documents: t.documents.iter().map(|d| d.to_string()).collect(),
                })
                .collect();

            if json {
                return print_json(&rows);
            }
            let table: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        r.priority.clone(),
                        r.patterns.join(", "),
                        r.documents.join(", "),
                    ]
                })
                .collect();
            print_table(&["ID", "PRIORITY", "PATTERNS", "DOCUMENTS"], &table);
        }
        ListSubcommand::Documents => {
            let (_config, corpus) = super::load_context(root, rules_dir)?;
            let rows: Vec<DocumentRow> = corpus
                .list()
                .map(|d| DocumentRow {
                    id: d.id.clone(),
                    always_apply: d.meta.always_apply,
                    description: d.meta.description.clone().unwrap_or_default(),
                })
                .collect();

            if json {
                return print_json(&rows);
            }
            let table: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        if r.always_apply { "always" } else { "" }.to_string(),
                        r.description.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "APPLY", "DESCRIPTION"], &table);
        }
    }
    Ok(())
}
