use std::path::PathBuf;

use clap::Args;
use heck::ToKebabCase;
use serde::Serialize;

use zui_scaffold::answers::{self, AnswerDefaults, AnswerOverrides};
use zui_scaffold::prompt::PromptEngine;
use zui_scaffold::scaffold::{ScaffoldOutput, Scaffolder};
use zui_scaffold::{git, log_status, tty, Error};

use super::CmdResult;

#[derive(Args)]
pub struct InitArgs {
    /// Target directory containing the starter template (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<String>,

    /// Plugin ID (skips the prompt)
    #[arg(long, value_name = "ID")]
    pub plugin_id: Option<String>,

    /// Display name, 3-40 characters (skips the prompt)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Description, up to 50 characters (skips the prompt)
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Comma-separated tags, up to 5 (skips the prompt)
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Author (skips the prompt; default: global git user name)
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Never prompt; resolve every field from flags and defaults
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub scaffold: ScaffoldOutput,
    pub next_steps: Vec<String>,
}

pub fn run(args: InitArgs) -> CmdResult<InitOutput> {
    let root = resolve_root(args.dir.as_deref())?;

    let defaults = AnswerDefaults {
        plugin_id: default_plugin_id(&root),
        author: git::global_user_name(),
    };

    let interactive = !args.yes && tty::require_tty_for_interactive();
    let engine = PromptEngine::with_interactive(interactive);

    let overrides = AnswerOverrides {
        plugin_id: args.plugin_id,
        display_name: args.name,
        description: args.description,
        tags: args.tags,
        author: args.author,
    };

    let collected = answers::collect(&engine, &root, &defaults, overrides)?;

    let scaffold = Scaffolder::new(&root, collected).run()?;

    let next_steps = vec!["npm install".to_string(), "npm run dev".to_string()];

    log_status!("init", "Scaffolding complete. Happy coding!");
    for step in &next_steps {
        tty::status(&format!("> {}", step));
    }

    Ok((
        InitOutput {
            command: "init",
            scaffold,
            next_steps,
        },
        0,
    ))
}

fn resolve_root(dir: Option<&str>) -> zui_scaffold::Result<PathBuf> {
    match dir {
        Some(dir) => Ok(PathBuf::from(shellexpand::tilde(dir).into_owned())),
        None => std::env::current_dir().map_err(|e| {
            Error::internal_io(
                format!("Failed to resolve current directory: {}", e),
                Some("resolve target root".to_string()),
            )
        }),
    }
}

/// Kebab-cased basename of the target root, offered as the default plugin ID.
fn default_plugin_id(root: &std::path::Path) -> Option<String> {
    root.file_name()
        .map(|name| name.to_string_lossy().to_kebab_case())
        .filter(|id| !id.is_empty())
}
