//! Collected plugin metadata and its normalization.
//!
//! `Answers` is created once from prompt (or flag) responses and is immutable
//! afterwards; the rename and rewrite steps consume it. Normalization happens
//! in `Answers::from_raw` after every field has been accepted by its
//! validation rule.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::prompt::{PromptEngine, TextPrompt};
use crate::validate;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    pub plugin_id: String,
    pub display_name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: String,
}

/// Raw prompt responses, prior to normalization.
#[derive(Debug, Default)]
pub struct RawAnswers {
    pub plugin_id: String,
    pub display_name: String,
    pub description: String,
    pub tags: String,
    pub author: String,
}

impl Answers {
    /// Normalize accepted raw values into the final record.
    ///
    /// All fields are trimmed. The plugin ID is lowercased. Description and
    /// author have runs of spaces collapsed to one. Tags are split on commas
    /// after space runs become commas, with empty segments dropped.
    pub fn from_raw(raw: RawAnswers) -> Self {
        Self {
            plugin_id: raw.plugin_id.trim().to_lowercase(),
            display_name: raw.display_name.trim().to_string(),
            description: collapse_spaces(&raw.description),
            tags: normalize_tags(&raw.tags),
            author: collapse_spaces(&raw.author),
        }
    }

    /// Tags rendered as the inner part of a JSON string array,
    /// e.g. `x","y` for `["x","y"]` once the surrounding quotes in the
    /// template close around it.
    pub fn tags_fragment(&self) -> String {
        self.tags.join("\",\"")
    }
}

/// Defaults resolved once at the process boundary: the kebab-cased working
/// directory name as the candidate plugin ID, the global git identity as the
/// candidate author.
#[derive(Debug, Default)]
pub struct AnswerDefaults {
    pub plugin_id: Option<String>,
    pub author: Option<String>,
}

/// Field values supplied up front (CLI flags). A present value skips the
/// prompt; if it fails validation the error is terminal instead of
/// re-prompting.
#[derive(Debug, Default)]
pub struct AnswerOverrides {
    pub plugin_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub author: Option<String>,
}

/// Collect and normalize all five fields, in fixed order.
///
/// Each field is validated before acceptance; the collision check for the
/// plugin ID is rooted at `root`.
pub fn collect(
    engine: &PromptEngine,
    root: &Path,
    defaults: &AnswerDefaults,
    overrides: AnswerOverrides,
) -> Result<Answers> {
    let plugin_id = field(
        engine,
        overrides.plugin_id,
        TextPrompt::new("Plugin ID", defaults.plugin_id.clone()),
        |v| validate::plugin_id(v, root),
    )?;

    let display_name = field(
        engine,
        overrides.display_name,
        TextPrompt::new("Display name (40 chars)", None),
        validate::display_name,
    )?;

    let description = field(
        engine,
        overrides.description,
        TextPrompt::new("Description (50 chars)", Some(String::new())),
        validate::description,
    )?;

    let tags = field(
        engine,
        overrides.tags,
        TextPrompt::new("Tags (comma separated, max 5)", Some(String::new())),
        validate::tags,
    )?;

    let author = field(
        engine,
        overrides.author,
        TextPrompt::new("Author", defaults.author.clone()),
        validate::author,
    )?;

    Ok(Answers::from_raw(RawAnswers {
        plugin_id,
        display_name,
        description,
        tags,
        author,
    }))
}

fn field(
    engine: &PromptEngine,
    override_value: Option<String>,
    prompt: TextPrompt,
    validate: impl Fn(&str) -> Result<()>,
) -> Result<String> {
    match override_value {
        // Trimmed like interactive input, so rules that count raw segments
        // (the tag limit) see the same value on both paths.
        Some(value) => {
            let value = value.trim().to_string();
            validate(&value)?;
            Ok(value)
        }
        None => engine.text_validated(&prompt, validate),
    }
}

/// Collapse runs of spaces to a single space and trim.
pub fn collapse_spaces(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_space = false;

    for ch in value.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }

    out.trim().to_string()
}

/// Collapse runs of spaces to a single comma.
///
/// This is the raw transform the tag-count validation operates on.
pub fn spaces_to_commas(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_space = false;

    for ch in value.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(',');
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }

    out
}

fn normalize_tags(value: &str) -> Vec<String> {
    let commas = spaces_to_commas(value.trim());

    let mut collapsed = String::with_capacity(commas.len());
    let mut prev_comma = false;
    for ch in commas.chars() {
        if ch == ',' {
            if !prev_comma {
                collapsed.push(',');
            }
            prev_comma = true;
        } else {
            collapsed.push(ch);
            prev_comma = false;
        }
    }

    collapsed
        .split(',')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
