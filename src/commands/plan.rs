//! Plan command implementation
//!
//! Shows everything a resolution attempt would use without performing one:
//! the repository search order, the adapted resolver coordinate, and the
//! candidate artifact location in each repository per its layout.

use std::path::PathBuf;

use console::Style;
use serde_json::json;

use crate::cli::PlanArgs;
use crate::commands::helpers::{load_settings, repository_json};
use crate::coordinate::{Coordinate, ResolverCoordinate};
use crate::error::Result;
use crate::handler::HandlerRegistry;
use crate::layout::LayoutRegistry;
use crate::repository::build_search_order;

/// Run plan command
pub fn run(settings_path: Option<PathBuf>, args: PlanArgs) -> Result<()> {
    let layouts = LayoutRegistry::builtin();
    let handlers = HandlerRegistry::builtin();
    let settings = load_settings(settings_path.as_ref())?;
    let context = settings.project_context(&layouts)?;

    let coordinate: Coordinate = args.coordinate.parse()?;
    let adapted = ResolverCoordinate::from_coordinate(&coordinate, &handlers);

    let order = build_search_order(
        context.repositories(),
        args.repositories.as_deref(),
        &layouts,
    )?;

    if args.json {
        let value = json!({
            "coordinate": {
                "group_id": adapted.group_id,
                "artifact_id": adapted.artifact_id,
                "version": adapted.version,
                "classifier": adapted.classifier,
                "packaging": coordinate.packaging,
                "extension": adapted.extension,
            },
            "repositories": order.iter().map(repository_json).collect::<Vec<_>>(),
            "candidates": order
                .iter()
                .map(|repository| {
                    json!({
                        "repository": repository.id(),
                        "url": repository.artifact_url(&adapted),
                    })
                })
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    display_coordinate(&coordinate, &adapted);
    println!();
    super::repos::display_search_order(&order);
    if !order.is_empty() {
        println!();
        display_candidates(&order, &adapted);
    }
    Ok(())
}

fn display_coordinate(coordinate: &Coordinate, adapted: &ResolverCoordinate) {
    let label = Style::new().bold();
    println!("{}", label.apply_to("Coordinate:"));
    println!("  {} {}", label.apply_to("group:     "), adapted.group_id);
    println!("  {} {}", label.apply_to("artifact:  "), adapted.artifact_id);
    println!("  {} {}", label.apply_to("version:   "), adapted.version);
    if let Some(ref classifier) = adapted.classifier {
        println!("  {} {}", label.apply_to("classifier:"), classifier);
    }
    println!(
        "  {} {} {}",
        label.apply_to("packaging: "),
        coordinate.packaging,
        Style::new()
            .dim()
            .apply_to(format!("(extension: {})", adapted.extension))
    );
}

fn display_candidates(
    order: &[crate::repository::Repository],
    adapted: &ResolverCoordinate,
) {
    println!("{}", Style::new().bold().apply_to("Candidate locations:"));
    for repository in order {
        println!(
            "  {}  {}",
            Style::new().bold().yellow().apply_to(repository.id()),
            repository.artifact_url(adapted)
        );
    }
}
