//! The `quizmith login` and `quizmith logout` commands.

use std::path::PathBuf;

use anyhow::Result;

pub fn login(
    username: String,
    password: String,
    store: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = super::resolve_config(config.as_deref(), None, store)?;
    let admin_store = super::open_admin_store(&config)?;

    if !admin_store.login(&username, &password) {
        anyhow::bail!("invalid credentials");
    }

    println!("Logged in as {username}.");
    Ok(())
}

pub fn logout(store: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = super::resolve_config(config.as_deref(), None, store)?;
    let admin_store = super::open_admin_store(&config)?;
    admin_store.logout();
    println!("Logged out.");
    Ok(())
}
