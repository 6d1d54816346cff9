//! The `quizmith import` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub fn execute(input: PathBuf, store: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = super::resolve_config(config.as_deref(), None, store)?;
    let admin_store = super::open_admin_store(&config)?;
    super::require_authenticated(&admin_store)?;

    let payload = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read import payload: {}", input.display()))?;

    if !admin_store.import_questions(&payload) {
        anyhow::bail!(
            "{} is not a valid question array; store left unchanged",
            input.display()
        );
    }

    println!(
        "Imported {} question(s) from {}",
        admin_store.all_questions().len(),
        input.display()
    );
    Ok(())
}
