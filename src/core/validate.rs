//! Per-field validation rules for collected plugin metadata.
//!
//! Each rule is a pure check over the raw prompt value: it either accepts or
//! returns a `validation.invalid_argument` error whose message explains the
//! rule. The prompt loop re-asks the same field on rejection; flag-supplied
//! values surface the error terminally instead.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

const RESERVED_PREFIXES: [&str; 2] = ["uni-", "dcloud-"];

const DESCRIPTION_MAX_CHARS: usize = 50;
const MAX_TAGS: usize = 5;

fn too_short_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]-?$").unwrap())
}

fn id_format_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*(-[A-Za-z0-9]+)+$").unwrap())
}

fn display_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_\x{4e00}-\x{9fa5}]{3,40}$").unwrap())
}

/// Validate a candidate plugin ID against the raw value.
///
/// The collision check is rooted at `root`, the directory the scaffolder
/// will operate in.
pub fn plugin_id(value: &str, root: &Path) -> Result<()> {
    if too_short_re().is_match(value) {
        return Err(invalid(
            "pluginId",
            "Plugin ID needs at least 2 characters",
            value,
        ));
    }

    if value.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(invalid(
            "pluginId",
            "Plugin ID must start with a letter",
            value,
        ));
    }

    let lowered = value.to_lowercase();
    if RESERVED_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        return Err(invalid(
            "pluginId",
            "Plugin ID must not start with the reserved prefixes \"uni-\" or \"dcloud-\"",
            value,
        ));
    }

    if !id_format_re().is_match(value) {
        return Err(invalid(
            "pluginId",
            "Plugin ID may only contain letters, digits, and hyphens, with at least one hyphen",
            value,
        ));
    }

    if root.join(value).exists() {
        return Err(invalid(
            "pluginId",
            format!(
                "A directory named '{}' already exists; choose another ID",
                value
            ),
            value,
        ));
    }

    Ok(())
}

pub fn display_name(value: &str) -> Result<()> {
    let trimmed = value.trim();

    if trimmed
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '_')
    {
        return Err(invalid(
            "displayName",
            "Display name must not start with a digit or underscore",
            value,
        ));
    }

    if !display_name_re().is_match(trimmed) {
        return Err(invalid(
            "displayName",
            "Display name may only contain Han characters, letters, digits, and underscores, 3-40 characters",
            value,
        ));
    }

    Ok(())
}

pub fn description(value: &str) -> Result<()> {
    let collapsed = crate::answers::collapse_spaces(value);
    if collapsed.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(invalid(
            "description",
            format!("Description is limited to {} characters", DESCRIPTION_MAX_CHARS),
            value,
        ));
    }

    Ok(())
}

/// Validate the raw tags value.
///
/// Counts comma-separated segments after collapsing space runs to commas,
/// before the final normalization. A tag containing literal spaces can
/// therefore count differently than the normalized list; this matches the
/// observed behavior and is kept as-is.
pub fn tags(value: &str) -> Result<()> {
    let collapsed = crate::answers::spaces_to_commas(value);
    if collapsed.split(',').count() > MAX_TAGS {
        return Err(invalid(
            "tags",
            format!("At most {} tags", MAX_TAGS),
            value,
        ));
    }

    Ok(())
}

pub fn author(value: &str) -> Result<()> {
    if crate::answers::collapse_spaces(value).is_empty() {
        return Err(invalid("author", "Author must not be empty", value));
    }

    Ok(())
}

fn invalid(field: &str, problem: impl Into<String>, value: &str) -> Error {
    Error::validation_invalid_argument(field, problem, Some(value.to_string()))
}
