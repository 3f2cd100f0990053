mod app;

use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Once logging is up, run() has already recorded the error.
            if log::max_level() == LevelFilter::Off {
                eprintln!("error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
