use crate::output::print_json;
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, id: &str, rules_dir: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let (_config, corpus) = super::load_context(root, rules_dir)?;
    let doc = corpus
        .get(id)
        .with_context(|| format!("document '{id}' not in corpus"))?;

    if json {
        return print_json(doc);
    }

    if let Some(ref description) = doc.meta.description {
        println!("# {id} — {description}\n");
    }
    print!("{}", doc.body);
    if !doc.body.ends_with('\n') {
        println!();
    }
    Ok(())
}
