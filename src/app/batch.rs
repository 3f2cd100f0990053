use crate::app::converter::{page_title, Converter};
use crate::app::error::ConvertError;
use crate::app::index::{IndexGenerator, INDEX_FILE};
use crate::app::models::{ConversionJob, Outcome, RunSummary, RuntimeConfig};
use crate::app::scanner::Scanner;
use crate::app::template::PageTemplate;
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where the page for `input` goes: same base name, `.html`, under `output_dir`.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".html");
    output_dir.join(name)
}

/// Converts one file. Fatal errors are returned; recoverable ones are logged and counted.
pub fn convert_single(
    config: &RuntimeConfig,
    template: &PageTemplate,
    input: &Path,
) -> Result<RunSummary, ConvertError> {
    if !input.is_file() {
        return Err(ConvertError::InputMissing(input.to_path_buf()));
    }

    let job = ConversionJob {
        input: input.to_path_buf(),
        output: output_path(input, &config.output_dir),
        title: page_title(input, config.title.as_deref()),
        show_index_link: false,
    };

    let mut summary = RunSummary::default();
    match Converter::new(template, config.overwrite).convert(&job) {
        Ok(outcome) => summary.record(&job, outcome),
        Err(err) if err.is_fatal() => return Err(err),
        Err(err) => {
            log::error!("{}", err);
            summary.record_error();
        }
    }
    Ok(summary)
}

/// Converts every note in the input folder, then writes the index unless disabled.
pub fn convert_folder(
    config: &RuntimeConfig,
    template: &PageTemplate,
) -> Result<RunSummary> {
    if !config.input_dir.is_dir() {
        return Err(ConvertError::InputDirMissing(config.input_dir.clone()).into());
    }

    let notes = Scanner::new(&config.input_dir)?.scan();
    if notes.is_empty() {
        log::warn!("No Markdown files found in {}", config.input_dir.display());
    } else {
        log::debug!(
            "Found {} Markdown files in {}",
            notes.len(),
            config.input_dir.display()
        );
    }

    let converter = Converter::new(template, config.overwrite);
    let mut summary = RunSummary::default();

    // Output paths already taken, in scan order. The index reserves its own.
    let mut claimed = HashSet::new();
    if config.generate_index {
        claimed.insert(config.output_dir.join(INDEX_FILE));
    }

    for input in notes {
        let job = ConversionJob {
            output: output_path(&input, &config.output_dir),
            title: page_title(&input, config.title.as_deref()),
            show_index_link: config.generate_index,
            input,
        };
        if !claimed.insert(job.output.clone()) {
            log::warn!(
                "Skipping {}: {} is already produced by another page",
                job.input.display(),
                job.output.display()
            );
            summary.record(&job, Outcome::SkippedClash);
            continue;
        }
        match converter.convert(&job) {
            Ok(outcome) => {
                if outcome == Outcome::SkippedEmpty {
                    // Nothing was written, so a later note may still use the path.
                    claimed.remove(&job.output);
                }
                summary.record(&job, outcome);
            }
            Err(err) => {
                log::error!("Error converting {}: {}", job.input.display(), err);
                summary.record_error();
            }
        }
    }

    if config.generate_index {
        match IndexGenerator::write(template, &config.output_dir, &summary.pages) {
            Ok(path) => log::info!(
                "Index: {} ({} pages)",
                path.display(),
                summary.pages.len()
            ),
            Err(err) => {
                log::error!("Error writing index: {}", err);
                summary.record_error();
            }
        }
    }

    Ok(summary)
}
