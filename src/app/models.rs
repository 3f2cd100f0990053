use log::LevelFilter;
use std::path::PathBuf;

/// Console verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Warn,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub file: Option<PathBuf>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_dir: PathBuf,
    /// Explicit page title. `None` means derive one from each file name.
    pub title: Option<String>,
    pub overwrite: bool,
    pub generate_index: bool,
    pub verbosity: Verbosity,
}

/// One file to convert.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
    pub show_index_link: bool,
}

/// What happened to a job that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converted,
    SkippedEmpty,
    SkippedExisting,
    /// Another note (or the index) already owns the output path.
    SkippedClash,
}

/// A page the index should link to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub path: PathBuf,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
    pub errors: usize,
    pub pages: Vec<PageEntry>,
}

impl RunSummary {
    pub fn record(&mut self, job: &ConversionJob, outcome: Outcome) {
        match outcome {
            Outcome::Converted => self.converted += 1,
            Outcome::SkippedEmpty | Outcome::SkippedClash => {
                self.skipped += 1;
                return;
            }
            Outcome::SkippedExisting => self.skipped += 1,
        }
        // Existing outputs kept under --no-overwrite are still valid pages.
        self.pages.push(PageEntry {
            path: job.output.clone(),
            title: job.title.clone(),
        });
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str) -> ConversionJob {
        ConversionJob {
            input: PathBuf::from(format!("notes/{name}.md")),
            output: PathBuf::from(format!("site/{name}.html")),
            title: name.to_string(),
            show_index_link: true,
        }
    }

    #[test]
    fn summary_counts_and_pages() {
        let mut summary = RunSummary::default();
        summary.record(&job("a"), Outcome::Converted);
        summary.record(&job("b"), Outcome::SkippedEmpty);
        summary.record(&job("c"), Outcome::SkippedExisting);
        summary.record(&job("d"), Outcome::SkippedClash);
        summary.record_error();

        assert_eq!(summary.converted, 1);
        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.errors, 1);
        let names: Vec<_> = summary.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn verbosity_thresholds() {
        assert_eq!(Verbosity::Quiet.level_filter(), LevelFilter::Warn);
        assert_eq!(Verbosity::Normal.level_filter(), LevelFilter::Info);
        assert_eq!(Verbosity::Verbose.level_filter(), LevelFilter::Debug);
    }
}
