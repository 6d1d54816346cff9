//! The `quizmith questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use quizmith_core::chain::SourceChain;

pub async fn execute(
    data: Option<PathBuf>,
    store: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = super::resolve_config(config.as_deref(), data, store)?;
    let admin_store = super::open_admin_store(&config)?;
    let loader = super::build_loader(&config);

    let chain = SourceChain::new(vec![Box::new(admin_store), Box::new(loader)]);
    let questions = chain.active_questions().await;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Topic", "Question", "Answers"]);
    for question in &questions {
        table.add_row(vec![
            Cell::new(&question.id),
            Cell::new(&question.topic),
            Cell::new(&question.text),
            Cell::new(question.answers.len()),
        ]);
    }

    println!("{table}");
    println!("{} question(s) active.", questions.len());

    Ok(())
}
