use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectConfigOpts {
    #[arg(
        help = "Project directory to summarize (default: current dir).",
        value_name = "PROJECT_ROOT"
    )]
    pub project_root: Option<PathBuf>,

    #[arg(
        long,
        help = "Path of the TOML config file (default: .backend-summary/summary.toml).",
        value_name = "CONFIG_FILE",
        conflicts_with = "no_config",
        help_heading = "Project Setup"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        help = "Disable loading any TOML config file.",
        conflicts_with = "config",
        help_heading = "Project Setup"
    )]
    pub no_config: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputOpts {
    #[arg(
        short,
        long,
        help = "Output file, relative to the project root (default: BACKEND_SUMMARY.md).",
        value_name = "FILE",
        help_heading = "Output"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(
    name = "backend-summary",
    author,
    version,
    about = "Generate a Markdown summary of a backend project.",
    long_about = "backend-summary walks a project directory and writes a single Markdown document \nwith the file tree, package.json dependencies, source files (secrets redacted), \nreference sections and file statistics.",
    help_template = "{about-section}\nUsage: {usage}\n\n{all-args}{after-help}",
    after_help = "EXAMPLES:\n  backend-summary\n  backend-summary ~/code/lego-backend -o docs/SUMMARY.md\n  backend-summary --no-config -vv"
)]
pub struct Cli {
    #[command(flatten)]
    pub project_config: ProjectConfigOpts,

    #[command(flatten)]
    pub output: OutputOpts,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(short, long, help = "Silence informational messages and warnings.")]
    pub quiet: bool,
}
