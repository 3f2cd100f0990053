use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const MARKDOWN_PATTERNS: &[&str] = &["*.md", "*.markdown"];

/// Finds the Markdown notes directly inside one folder.
pub struct Scanner {
    root: PathBuf,
    markdown_set: GlobSet,
}

impl Scanner {
    pub fn new(root: &Path) -> Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            markdown_set: build_globset(MARKDOWN_PATTERNS)?,
        })
    }

    /// Returns matching files sorted by path. Subfolders are not entered.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut notes = Vec::new();

        // Plain listing: hidden files and .gitignore rules do not apply to notes.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .max_depth(Some(1))
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    let path = entry.path();
                    if path == self.root || !path.is_file() {
                        continue;
                    }
                    if self.is_markdown(path) {
                        notes.push(path.to_path_buf());
                    } else {
                        log::debug!("Ignoring non-Markdown file {}", path.display());
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        notes.sort();
        notes
    }

    fn is_markdown(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.markdown_set.is_match(name))
    }
}

fn build_globset(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_markdown_files_sorted_and_shallow() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "a.markdown", "notes.txt", ".hidden.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/deep.md"), "x").unwrap();

        let names: Vec<String> = Scanner::new(dir.path())
            .unwrap()
            .scan()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, [".hidden.md", "a.markdown", "b.md"]);
    }
}
