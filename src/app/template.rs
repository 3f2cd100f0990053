use crate::app::error::{tera_message, ConvertError};
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

pub const BASE_TEMPLATE: &str = "base.html";

/// The page template every note is rendered through.
pub struct PageTemplate {
    tera: Tera,
    path: PathBuf,
    has_content_marker: bool,
}

impl PageTemplate {
    /// Loads `base.html` from `dir`. Any failure here is fatal for the run.
    pub fn load(dir: &Path) -> Result<Self, ConvertError> {
        if !dir.is_dir() {
            return Err(ConvertError::TemplateDirMissing(dir.to_path_buf()));
        }
        let path = dir.join(BASE_TEMPLATE);
        if !path.is_file() {
            return Err(ConvertError::TemplateMissing(path));
        }

        let source = fs::read_to_string(&path).map_err(|e| ConvertError::Read(path.clone(), e))?;

        let mut tera = Tera::default();
        // Notes are trusted input: `{{ content }}` inserts the rendered HTML as is.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(BASE_TEMPLATE, &source)
            .map_err(|e| ConvertError::TemplateInvalid(path.clone(), tera_message(&e)))?;

        Ok(Self {
            has_content_marker: has_content_marker(&source),
            tera,
            path,
        })
    }

    pub fn render(
        &self,
        title: &str,
        content: &str,
        show_index_link: bool,
    ) -> Result<String, ConvertError> {
        if !self.has_content_marker {
            return Err(ConvertError::MissingContentMarker(self.path.clone()));
        }

        let mut ctx = Context::new();
        ctx.insert("title", title);
        ctx.insert("content", content);
        ctx.insert("show_index_link", &show_index_link);

        self.tera
            .render(BASE_TEMPLATE, &ctx)
            .map_err(|e| ConvertError::Render(self.path.clone(), tera_message(&e)))
    }
}

/// True if some `{{ ... }}` expression starts with the `content` variable.
fn has_content_marker(source: &str) -> bool {
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return false;
        };
        let expr = after[..end].trim_start_matches('-').trim_start();
        let ident = expr
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()
            .unwrap_or_default();
        if ident == "content" {
            return true;
        }
        rest = &after[end + 2..];
    }
    false
}

#[cfg(test)]
pub(crate) const TEST_BASE_TEMPLATE: &str = "<html><head><title>{{ title }}</title></head><body>\
{% if show_index_link %}<a href=\"index.html\">Index</a>{% endif %}\
{{ content | safe }}</body></html>";
