//! Placeholder tokens and target files of the starter template.
//!
//! The starter ships under the fixed identifier `zui-component-starter`.
//! Five tokens derived from it are embedded in a fixed set of files; the
//! bare identifier is a substring of the other four, so substitution is
//! table-ordered with the identifier last.

use std::path::{Path, PathBuf};

use crate::answers::Answers;

/// The fixed starter identifier embedded in template paths and contents.
pub const PLACEHOLDER_ID: &str = "zui-component-starter";

pub const TOKEN_DESCRIPTION: &str = "zui-component-starter-description";
pub const TOKEN_NAME: &str = "zui-component-starter-name";
pub const TOKEN_TAGS: &str = "zui-component-starter-tags";
pub const TOKEN_AUTHOR: &str = "zui-component-starter-author";

/// The ordered replacement table. Order is load-bearing: the bare
/// identifier must be last.
pub fn replacements(answers: &Answers) -> [(&'static str, String); 5] {
    [
        (TOKEN_DESCRIPTION, answers.description.clone()),
        (TOKEN_NAME, answers.display_name.clone()),
        (TOKEN_TAGS, answers.tags_fragment()),
        (TOKEN_AUTHOR, answers.author.clone()),
        (PLACEHOLDER_ID, answers.plugin_id.clone()),
    ]
}

/// Apply the replacement table to full file content. Every occurrence of
/// every token is replaced.
pub fn apply(content: &str, replacements: &[(&'static str, String)]) -> String {
    let mut result = content.to_string();

    for (token, value) in replacements {
        result = result.replace(token, value);
    }

    result
}

/// Path of the template module directory under `root`.
pub fn module_dir(root: &Path, id: &str) -> PathBuf {
    root.join("src").join("uni_modules").join(id)
}

/// Path of the template component directory under `root`, for a module
/// directory still named `module_id`.
pub fn component_dir(root: &Path, module_id: &str, component_id: &str) -> PathBuf {
    module_dir(root, module_id)
        .join("components")
        .join(component_id)
}

/// The eight files rewritten during substitution, relative to `root`,
/// with the module paths already renamed to `plugin_id`.
pub fn target_files(root: &Path, plugin_id: &str) -> Vec<PathBuf> {
    let module = module_dir(root, plugin_id);

    vec![
        root.join("package.json"),
        root.join("README.md"),
        root.join("src").join("manifest.json"),
        root.join("src").join("pages.json"),
        module.join("readme.md"),
        module.join("package.json"),
        module
            .join("components")
            .join(plugin_id)
            .join(format!("{}.vue", plugin_id)),
        root.join("src").join("pages").join("index").join("index.vue"),
    ]
}
