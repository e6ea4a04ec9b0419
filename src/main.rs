//! Artifetch - artifact resolver front-end
//!
//! Command line for inspecting how an artifact coordinate resolves against an
//! ordered list of Maven-style remote repositories.

use clap::Parser;

use artifetch::cli::{Cli, Commands};
use artifetch::commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repos(args) => commands::repos::run(cli.settings, args),
        Commands::Plan(args) => commands::plan::run(cli.settings, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
