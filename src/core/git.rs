//! Git subprocess primitives for version-control initialization.

use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::command;

/// Read the globally configured git user name, if any.
///
/// Used as the default author value; absence is not an error.
pub fn global_user_name() -> Option<String> {
    command::run_optional("git", &["config", "--global", "user.name"])
}

pub fn is_git_repo(path: &Path) -> bool {
    command::succeeded_in(path, "git", &["rev-parse", "--git-dir"])
}

/// Initialize a repository at `path`, stage everything, and create the
/// initial commit.
///
/// Runs after all file transformations; a failure here leaves the
/// transformed files in place with no commit.
pub fn init_with_initial_commit(path: &Path, message: &str) -> Result<()> {
    git_in(path, &["init"])?;
    git_in(path, &["add", "."])?;
    git_in(path, &["commit", "-m", message])?;
    Ok(())
}

fn git_in(path: &Path, args: &[&str]) -> Result<()> {
    command::run_in(path, "git", args, &format!("git {}", args[0]))
        .map_err(|e| Error::git_command_failed(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_git_repo_false_for_plain_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!is_git_repo(tmp.path()));
    }

    #[test]
    fn init_commit_fails_outside_a_writable_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let err = init_with_initial_commit(&missing, "initial").unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::GitCommandFailed);
    }
}
