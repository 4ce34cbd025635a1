//! The scaffolding pipeline: rename the template paths to the chosen plugin
//! ID, substitute the placeholder tokens across the fixed target files, and
//! initialize version control.
//!
//! The pipeline is strictly ordered and one-shot. Renames fail fatally when
//! the source is missing or the destination exists; there is no rollback, so
//! a mid-sequence failure leaves the directory in a mixed state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::answers::Answers;
use crate::error::{Error, Result};
use crate::{git, template};

// log_status! is defined in lib.rs (#[macro_export]) and available crate-wide.

pub const INITIAL_COMMIT_MESSAGE: &str = "initial";

pub struct Scaffolder {
    root: PathBuf,
    answers: Answers,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRecord {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldOutput {
    pub plugin_id: String,
    pub root: String,
    pub renamed: Vec<RenameRecord>,
    pub rewritten: Vec<String>,
    pub committed: bool,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>, answers: Answers) -> Self {
        Self {
            root: root.into(),
            answers,
        }
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Run the full pipeline: filesystem transformation, then version
    /// control initialization with a single commit.
    pub fn run(&self) -> Result<ScaffoldOutput> {
        let mut output = self.transform()?;

        log_status!("init", "Initializing git...");
        git::init_with_initial_commit(&self.root, INITIAL_COMMIT_MESSAGE)?;
        output.committed = true;

        Ok(output)
    }

    /// Rename the template paths and rewrite the target files, without
    /// touching version control. Exposed separately so the filesystem
    /// transformation stays testable on its own.
    pub fn transform(&self) -> Result<ScaffoldOutput> {
        let id = &self.answers.plugin_id;

        log_status!("init", "Configuring template for {}...", id);

        fs::create_dir_all(&self.root).map_err(|e| {
            Error::internal_io(
                format!("Failed to create {}: {}", self.root.display(), e),
                Some("create target root".to_string()),
            )
        })?;

        // Order matters: each rename's source depends on the prior one.
        let starter_component =
            template::component_dir(&self.root, template::PLACEHOLDER_ID, template::PLACEHOLDER_ID);
        let renames = [
            (
                starter_component.join(format!("{}.vue", template::PLACEHOLDER_ID)),
                starter_component.join(format!("{}.vue", id)),
            ),
            (
                starter_component.clone(),
                template::component_dir(&self.root, template::PLACEHOLDER_ID, id),
            ),
            (
                template::module_dir(&self.root, template::PLACEHOLDER_ID),
                template::module_dir(&self.root, id),
            ),
        ];

        let mut renamed = Vec::with_capacity(renames.len());
        for (from, to) in &renames {
            self.checked_rename(from, to)?;
            renamed.push(RenameRecord {
                from: self.relative(from),
                to: self.relative(to),
            });
        }

        let replacements = template::replacements(&self.answers);
        let targets = template::target_files(&self.root, id);

        let mut rewritten = Vec::with_capacity(targets.len());
        for path in &targets {
            self.rewrite(path, &replacements)?;
            rewritten.push(self.relative(path));
        }

        Ok(ScaffoldOutput {
            plugin_id: id.clone(),
            root: self.root.display().to_string(),
            renamed,
            rewritten,
            committed: false,
        })
    }

    fn checked_rename(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.exists() {
            return Err(Error::template_missing_source(
                self.relative(from),
                "rename",
            ));
        }
        if to.exists() {
            return Err(Error::template_destination_exists(
                self.relative(to),
                "rename",
            ));
        }

        fs::rename(from, to).map_err(|e| {
            Error::internal_io(
                format!("Failed to rename {}: {}", from.display(), e),
                Some("rename template path".to_string()),
            )
        })
    }

    /// Full read, token substitution, full write. No atomic write guarantee.
    fn rewrite(&self, path: &Path, replacements: &[(&'static str, String)]) -> Result<()> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::template_target_not_found(self.relative(path)));
            }
            Err(e) => {
                return Err(Error::internal_io(
                    format!("Failed to read {}: {}", path.display(), e),
                    Some("read template file".to_string()),
                ));
            }
        };

        let updated = template::apply(&content, replacements);

        fs::write(path, updated).map_err(|e| {
            Error::internal_io(
                format!("Failed to write {}: {}", path.display(), e),
                Some("write template file".to_string()),
            )
        })
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
