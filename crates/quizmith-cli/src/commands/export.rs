//! The `quizmith export` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub fn execute(output: PathBuf, store: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = super::resolve_config(config.as_deref(), None, store)?;
    let admin_store = super::open_admin_store(&config)?;
    super::require_authenticated(&admin_store)?;

    let count = admin_store.all_questions().len();
    let payload = admin_store.export_questions();
    std::fs::write(&output, payload)
        .with_context(|| format!("failed to write export to {}", output.display()))?;

    println!("Exported {count} question(s) to {}", output.display());
    Ok(())
}
