//! Repos command implementation

use std::path::PathBuf;

use console::Style;
use serde_json::json;

use crate::cli::ReposArgs;
use crate::commands::helpers::{load_settings, repository_json};
use crate::error::Result;
use crate::layout::LayoutRegistry;
use crate::repository::{Repository, build_search_order};

/// Run repos command
pub fn run(settings_path: Option<PathBuf>, args: ReposArgs) -> Result<()> {
    let layouts = LayoutRegistry::builtin();
    let settings = load_settings(settings_path.as_ref())?;
    let context = settings.project_context(&layouts)?;

    let order = build_search_order(
        context.repositories(),
        args.repositories.as_deref(),
        &layouts,
    )?;

    if args.json {
        let value = json!({
            "repositories": order.iter().map(repository_json).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    display_search_order(&order);
    Ok(())
}

/// Print the search order as a numbered, styled list
pub fn display_search_order(order: &[Repository]) {
    if order.is_empty() {
        println!("No repositories configured.");
        return;
    }

    println!("{}", Style::new().bold().apply_to("Search order:"));
    for (index, repository) in order.iter().enumerate() {
        println!(
            "  {}. {}  {}  {}",
            index + 1,
            Style::new().bold().yellow().apply_to(repository.id()),
            Style::new().dim().apply_to(repository.layout().name()),
            repository.url()
        );
    }
}
