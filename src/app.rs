// Declare modules
pub mod batch;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod index;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod scanner;
pub mod template;

use anyhow::Result;
use clap::Parser;

use self::cli::{Cli, ABOUT};
use self::config::{load_config_file, resolve_config};
use self::logging::LogContext;
use self::models::RunSummary;
use self::template::PageTemplate;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();
    if args.about {
        println!("{}", ABOUT);
        return Ok(());
    }

    // 2. Logging comes first so config warnings reach the log file
    let logs = LogContext::init(args.verbosity(), &args.log_dir())?;

    // 3. Resolve Configuration
    let file = args
        .config
        .as_deref()
        .map(load_config_file)
        .unwrap_or_default();
    let config = resolve_config(&args, file);
    log::debug!("Resolved configuration: {:?}", config);

    // 4. Template problems are fatal before anything is written
    let result = PageTemplate::load(&config.template_dir)
        .map_err(anyhow::Error::from)
        .and_then(|template| match &config.file {
            Some(file) => Ok(batch::convert_single(&config, &template, file)?),
            None => batch::convert_folder(&config, &template),
        });

    // 5. Report
    if let Ok(summary) = &result {
        report(summary);
    }
    log::debug!(
        "Console at {:?}, log written to {}",
        config.verbosity,
        logs.log_file().display()
    );
    if let Err(err) = &result {
        log::error!("{:#}", err);
    }
    logs.finish();

    result.map(|_| ())
}

fn report(summary: &RunSummary) {
    let line = format!(
        "Done: {} converted, {} skipped, {} errors",
        summary.converted, summary.skipped, summary.errors
    );
    if summary.errors > 0 {
        log::warn!("{}", line);
    } else {
        log::info!("{}", line);
    }
}
