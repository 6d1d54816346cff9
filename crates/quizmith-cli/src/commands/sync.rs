//! The `quizmith seed` and `quizmith reload` commands.

use std::path::PathBuf;

use anyhow::Result;

pub async fn seed(
    data: Option<PathBuf>,
    store: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = super::resolve_config(config.as_deref(), data, store)?;
    let admin_store = super::open_admin_store(&config)?;
    super::require_authenticated(&admin_store)?;
    let loader = super::build_loader(&config);

    let seeded = admin_store.initialize_from_backend(&loader).await?;
    if seeded == 0 {
        println!("Store already has questions; seed skipped.");
    } else {
        println!("Seeded {seeded} question(s) from the JSON config.");
    }
    Ok(())
}

pub async fn reload(
    force: bool,
    data: Option<PathBuf>,
    store: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    if !force {
        anyhow::bail!("reload discards all admin edits; pass --force to confirm");
    }

    let config = super::resolve_config(config.as_deref(), data, store)?;
    let admin_store = super::open_admin_store(&config)?;
    super::require_authenticated(&admin_store)?;
    let loader = super::build_loader(&config);

    let count = admin_store.reload_from_backend(&loader).await?;
    println!("Replaced store with {count} question(s) from the JSON config.");
    Ok(())
}
