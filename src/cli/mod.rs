//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - plan: Plan command arguments
//! - repos: Repos command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod plan;
pub mod repos;

pub use completions::CompletionsArgs;
pub use plan::PlanArgs;
pub use repos::ReposArgs;

/// Artifetch - artifact resolver front-end
///
/// Inspect how an artifact coordinate resolves against an ordered list of
/// Maven-style remote repositories.
#[derive(Parser, Debug)]
#[command(
    name = "artifetch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Lean artifact resolver for Maven-style repositories",
    long_about = "Artifetch parses repository specifications (bare URLs or id::layout::url), \
                  assembles the ordered repository search scope, and shows the exact \
                  coordinate and candidate locations a resolution attempt would use. \
                  Fetching itself is delegated to an embedding resolution engine.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  artifetch repos -r https://repo.maven.apache.org/maven2      \x1b[90m# Parse a bare URL\x1b[0m\n   \
                  artifetch repos -r \"central::default::https://repo1.maven.org/maven2\"\n   \
                  artifetch plan org.slf4j:slf4j-api:2.0.13                    \x1b[90m# Show the resolution plan\x1b[0m\n   \
                  artifetch plan org.slf4j:slf4j-api:2.0.13:jar:sources --json \x1b[90m# Machine-readable plan\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Settings file (defaults to .artifetch.yaml in the current directory)
    #[arg(long, short = 's', global = true, env = "ARTIFETCH_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the repository search order
    Repos(ReposArgs),

    /// Show the full resolution plan for a coordinate
    Plan(PlanArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
