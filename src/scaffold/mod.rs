//! Class scaffolding
//!
//! Renders the declaration/definition pair for a class and writes both
//! files into a target directory. Each write fully overwrites the file.
//! There is no rollback: if the definition write fails, the declaration
//! stays on disk.

pub mod templates;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::paths;

/// A rendered file and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

pub struct Scaffold {
    config: Config,
}

impl Scaffold {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render both class files without touching the filesystem
    ///
    /// Declaration first, then definition.
    pub fn render_class(&self, class_name: &str, dir: &Path) -> Vec<GeneratedFile> {
        let template = &self.config.template;
        let placeholder = &self.config.placeholder;

        vec![
            GeneratedFile {
                path: paths::declaration_path(dir, class_name, &self.config),
                contents: templates::render(template.declaration, placeholder, class_name),
            },
            GeneratedFile {
                path: paths::definition_path(dir, class_name, &self.config),
                contents: templates::render(template.definition, placeholder, class_name),
            },
        ]
    }

    /// Render and write `<dir>/<class_name>.h` and `<dir>/<class_name>.cpp`
    pub fn create_class(&self, class_name: &str, dir: &Path) -> Result<Vec<GeneratedFile>> {
        if class_name.is_empty() {
            bail!("Class name must not be empty");
        }

        debug!("scaffolding class '{}' in {}", class_name, dir.display());

        let files = self.render_class(class_name, dir);
        for file in &files {
            fs::write(&file.path, &file.contents)
                .with_context(|| format!("Failed to write {}", file.path.display()))?;
            info!("created {}", file.path.display());
        }

        Ok(files)
    }
}

impl Default for Scaffold {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
