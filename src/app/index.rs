use crate::app::error::ConvertError;
use crate::app::markdown;
use crate::app::models::PageEntry;
use crate::app::template::PageTemplate;
use pathdiff::diff_paths;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";
pub const INDEX_TITLE: &str = "Index";

pub struct IndexGenerator;

impl IndexGenerator {
    /// Markdown list linking each page relative to `output_dir`, sorted by file name.
    pub fn generate_listing(output_dir: &Path, pages: &[PageEntry]) -> String {
        let index_path = output_dir.join(INDEX_FILE);
        let mut entries: Vec<(String, &str)> = pages
            .iter()
            .filter(|page| page.path != index_path)
            .map(|page| {
                let href = diff_paths(&page.path, output_dir)
                    .unwrap_or_else(|| page.path.clone())
                    .to_string_lossy()
                    .replace('\\', "/");
                (href, page.title.as_str())
            })
            .collect();
        entries.sort();
        entries.dedup();

        let mut output = String::new();
        for (href, title) in entries {
            output.push_str(&format!("- [{}](<{}>)\n", escape_link_text(title), href));
        }
        output
    }

    /// Renders and writes `index.html`. The index is always rewritten.
    pub fn write(
        template: &PageTemplate,
        output_dir: &Path,
        pages: &[PageEntry],
    ) -> Result<PathBuf, ConvertError> {
        let listing = Self::generate_listing(output_dir, pages);
        let content = markdown::render(&listing);
        let page = template.render(INDEX_TITLE, &content, false)?;

        let path = output_dir.join(INDEX_FILE);
        crate::app::converter::write_page(&path, &page)?;
        Ok(path)
    }
}

fn escape_link_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '[' | ']' | '\\' | '*' | '_' | '`' | '<') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
