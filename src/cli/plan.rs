use clap::Parser;

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Plan against the settings repositories:\n    artifetch plan org.slf4j:slf4j-api:2.0.13\n\n\
                  Plan with an extra repository and a classifier:\n    \
                  artifetch plan org.slf4j:slf4j-api:2.0.13:jar:sources -r https://repo1.maven.org/maven2\n\n\
                  Machine-readable output:\n    artifetch plan org.slf4j:slf4j-api:2.0.13 --json")]
pub struct PlanArgs {
    /// Coordinate in the form groupId:artifactId:version[:packaging[:classifier]]
    pub coordinate: String,

    /// Extra repositories, comma-separated, each a bare URL or id::layout::url
    #[arg(long, short = 'r')]
    pub repositories: Option<String>,

    /// Emit JSON instead of styled text
    #[arg(long)]
    pub json: bool,
}
