use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "notes";
pub const DEFAULT_OUTPUT: &str = "site";
pub const DEFAULT_TEMPLATE: &str = "templates";

/// Keys recognized in a configuration file. Unknown keys are ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub title: Option<String>,
    pub overwrite: Option<bool>,
}

fn parse_config(path: &Path, content: &str) -> Result<ConfigFile> {
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    let parsed: ConfigFile = if is_toml {
        toml::from_str(content).context("Failed to parse TOML config")?
    } else {
        // An empty YAML document parses as null; treat it as no keys.
        serde_yaml_ng::from_str::<Option<ConfigFile>>(content)
            .context("Failed to parse YAML config")?
            .unwrap_or_default()
    };
    Ok(parsed)
}

/// Loads a configuration file. A missing or malformed file is reported and
/// treated as an empty configuration.
pub fn load_config_file(path: &Path) -> ConfigFile {
    if !path.exists() {
        log::warn!(
            "Config file {} not found, using defaults",
            path.display()
        );
        return ConfigFile::default();
    }

    let loaded = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))
        .and_then(|content| parse_config(path, &content));

    match loaded {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("{err:#}; ignoring {}", path.display());
            ConfigFile::default()
        }
    }
}

/// Three-tier lookup: CLI value, then config value, then the default.
pub fn resolve<T>(cli: Option<T>, file: Option<T>, default: T) -> T {
    cli.or(file).unwrap_or(default)
}

pub fn resolve_config(cli: &Cli, file: ConfigFile) -> RuntimeConfig {
    RuntimeConfig {
        file: cli.file.clone(),
        input_dir: resolve(cli.input.clone(), file.input, DEFAULT_INPUT.into()),
        output_dir: resolve(cli.output.clone(), file.output, DEFAULT_OUTPUT.into()),
        template_dir: resolve(cli.template.clone(), file.template, DEFAULT_TEMPLATE.into()),
        title: cli.title.clone().or(file.title),
        overwrite: resolve(cli.overwrite(), file.overwrite, true),
        generate_index: !cli.no_index,
        verbosity: cli.verbosity(),
    }
}
