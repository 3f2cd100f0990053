use crate::app::models::Verbosity;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

pub const DEFAULT_LOG_DIR: &str = "logs";

pub const ABOUT: &str = "chalkdust turns a folder of Markdown notes into a small static site. \
Each note is rendered through templates/base.html and an index page links them together.";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert Markdown notes to HTML pages",
    group(ArgGroup::new("overwrite_policy").args(["no_overwrite", "force"])),
    group(ArgGroup::new("verbosity").args(["quiet", "verbose"]))
)]
pub struct Cli {
    /// Convert a single Markdown file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Input folder containing .md files (default: notes/)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output folder for .html files (default: site/)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Folder containing base.html (default: templates/)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Page title; derived from the file name when omitted
    #[arg(long)]
    pub title: Option<String>,

    /// Configuration file (.toml, or YAML for any other extension)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Folder for run logs (default: logs/)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Do not generate index.html in folder mode
    #[arg(long)]
    pub no_index: bool,

    /// Skip files whose output already exists
    #[arg(long)]
    pub no_overwrite: bool,

    /// Overwrite existing output files
    #[arg(long)]
    pub force: bool,

    /// Only print warnings and errors
    #[arg(long, short)]
    pub quiet: bool,

    /// Print debug messages
    #[arg(long, short)]
    pub verbose: bool,

    /// Show what this tool does and exit
    #[arg(long)]
    pub about: bool,
}

impl Cli {
    /// `Some(true)` for `--force`, `Some(false)` for `--no-overwrite`.
    pub fn overwrite(&self) -> Option<bool> {
        match (self.force, self.no_overwrite) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// The log folder is only configurable here: logging starts before the config file is read.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "chalkdust",
            "--input",
            "in",
            "--no-overwrite",
            "--verbose",
            "--no-index",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in")));
        assert_eq!(cli.overwrite(), Some(false));
        assert_eq!(cli.verbosity(), Verbosity::Verbose);
        assert!(cli.no_index);
    }

    #[test]
    fn rejects_quiet_with_verbose() {
        assert!(Cli::try_parse_from(["chalkdust", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn rejects_force_with_no_overwrite() {
        assert!(Cli::try_parse_from(["chalkdust", "--force", "--no-overwrite"]).is_err());
    }
}
