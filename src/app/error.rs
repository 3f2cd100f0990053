use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file {0} does not exist")]
    InputMissing(PathBuf),
    #[error("Input folder {0} does not exist")]
    InputDirMissing(PathBuf),
    #[error("Template folder {0} does not exist")]
    TemplateDirMissing(PathBuf),
    #[error("Template {0} does not exist")]
    TemplateMissing(PathBuf),
    #[error("Template {0} could not be parsed: {1}")]
    TemplateInvalid(PathBuf, String),
    #[error("Template {0} has no {{{{ content }}}} marker")]
    MissingContentMarker(PathBuf),
    #[error("Failed to render {0}: {1}")]
    Render(PathBuf, String),
    #[error("Failed to read file {0}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("Failed to write file {0}: {1}")]
    Write(PathBuf, std::io::Error),
}

impl ConvertError {
    /// Fatal errors end the run; everything else is counted and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConvertError::InputMissing(_)
                | ConvertError::InputDirMissing(_)
                | ConvertError::TemplateDirMissing(_)
                | ConvertError::TemplateMissing(_)
                | ConvertError::TemplateInvalid(..)
        )
    }
}

/// Tera keeps the useful part of a message (line, column, variable) in its source chain.
pub fn tera_message(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
