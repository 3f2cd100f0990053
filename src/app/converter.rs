use crate::app::error::ConvertError;
use crate::app::markdown;
use crate::app::models::{ConversionJob, Outcome};
use crate::app::template::PageTemplate;
use std::fs;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Chalkdust Note";

/// Turns a file stem like `linear_algebra-intro` into `Linear Algebra Intro`.
pub fn title_from_stem(stem: &str) -> String {
    let title = stem
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title for `path`: the explicit one if given, otherwise derived from the file name.
pub fn page_title(path: &Path, explicit: Option<&str>) -> String {
    match explicit {
        Some(title) => title.to_string(),
        None => title_from_stem(&path.file_stem().unwrap_or_default().to_string_lossy()),
    }
}

pub struct Converter<'a> {
    template: &'a PageTemplate,
    overwrite: bool,
}

impl<'a> Converter<'a> {
    pub fn new(template: &'a PageTemplate, overwrite: bool) -> Self {
        Self {
            template,
            overwrite,
        }
    }

    pub fn convert(&self, job: &ConversionJob) -> Result<Outcome, ConvertError> {
        if !job.input.is_file() {
            return Err(ConvertError::InputMissing(job.input.clone()));
        }

        let source =
            fs::read_to_string(&job.input).map_err(|e| ConvertError::Read(job.input.clone(), e))?;

        if source.trim().is_empty() {
            log::warn!("Skipping {}: file is empty", job.input.display());
            return Ok(Outcome::SkippedEmpty);
        }

        if !self.overwrite && job.output.exists() {
            log::warn!(
                "Skipping {}: {} already exists",
                job.input.display(),
                job.output.display()
            );
            return Ok(Outcome::SkippedExisting);
        }

        let body = markdown::render(&source);
        let page = self
            .template
            .render(&job.title, &body, job.show_index_link)?;

        write_page(&job.output, &page)?;
        log::info!("Converted: {} → {}", job.input.display(), job.output.display());
        Ok(Outcome::Converted)
    }
}

/// Writes `page` to `path`, creating parent folders as needed.
pub fn write_page(path: &Path, page: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConvertError::Write(path.to_path_buf(), e))?;
    }
    fs::write(path, page).map_err(|e| ConvertError::Write(path.to_path_buf(), e))
}
