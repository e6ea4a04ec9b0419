use clap::Parser;

/// Arguments for the repos command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show repositories from the settings file:\n    artifetch repos\n\n\
                  Append extra repositories:\n    artifetch repos -r \"http://x, id2::default::http://y\"\n\n\
                  Machine-readable output:\n    artifetch repos --json")]
pub struct ReposArgs {
    /// Extra repositories, comma-separated, each a bare URL or id::layout::url
    #[arg(long, short = 'r')]
    pub repositories: Option<String>,

    /// Emit JSON instead of styled text
    #[arg(long)]
    pub json: bool,
}
