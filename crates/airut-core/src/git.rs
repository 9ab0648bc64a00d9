//! Version-control queries for one release's log window.
//!
//! These are the host-side collaborators of the core pipeline: they shell
//! out to git and hand back plain values, so everything downstream stays
//! pure and synchronous.

use crate::errors::{AirutError, Result};
use std::path::Path;
use std::process::Command;

/// Log format producing one decodable author record per commit.
const AUTHOR_FORMAT: &str = r#"--format={"name": "%cn", "email": "%ce"}"#;

/// Count the commits in the release window.
///
/// `previous` is absent for a first release, in which case the window covers
/// everything reachable from `current`. Dry-run hosts pass `HEAD` as
/// `current` since the tag may not exist yet.
pub fn commit_count(root: &Path, previous: Option<&str>, current: &str) -> Result<u64> {
    let range = log_range(previous, current);
    let output = Command::new("git")
        .current_dir(root)
        .args(["rev-list", "--count", &range])
        .output()
        .map_err(AirutError::Io)?;

    if !output.status.success() {
        return Err(AirutError::Git(format!(
            "git rev-list --count {range} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.trim().parse().map_err(|_| {
        AirutError::Git(format!(
            "unexpected rev-list output: {:?}",
            stdout.trim()
        ))
    })
}

/// Raw author records for the release window, one line per commit in the
/// shape the contributor aggregator decodes.
pub fn contributor_log_lines(
    root: &Path,
    previous: Option<&str>,
    current: &str,
) -> Result<Vec<String>> {
    let range = log_range(previous, current);
    let output = Command::new("git")
        .current_dir(root)
        .args(["log", AUTHOR_FORMAT, &range])
        .output()
        .map_err(AirutError::Io)?;

    if !output.status.success() {
        return Err(AirutError::Git(format!(
            "git log {range} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.to_string())
        .collect())
}

fn log_range(previous: Option<&str>, current: &str) -> String {
    match previous {
        Some(previous) => format!("{previous}..{current}"),
        None => current.to_string(),
    }
}

/// Resolve the repository's browse URL.
///
/// An explicit configuration override wins; otherwise the `origin` remote is
/// parsed. Returns `None` when neither yields a usable URL.
pub fn detect_repository(root: &Path, config_url: Option<&str>) -> Option<String> {
    if let Some(url) = config_url {
        return Some(url.trim_end_matches('/').to_string());
    }

    let output = Command::new("git")
        .current_dir(root)
        .args(["remote", "get-url", "origin"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let binding = String::from_utf8_lossy(&output.stdout);
    parse_remote_url(binding.trim())
}

/// Turn an https or ssh remote URL into `https://{host}/{path}`.
fn parse_remote_url(url: &str) -> Option<String> {
    // HTTPS: https://host/owner/repo.git or https://host/owner/repo
    if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        let rest = rest.strip_suffix(".git").unwrap_or(rest);
        let (host, path) = rest.split_once('/')?;
        if host.is_empty() || path.is_empty() {
            return None;
        }
        return Some(format!("https://{host}/{path}"));
    }

    // SSH: git@host:owner/repo.git
    if let Some(rest) = url.strip_prefix("git@") {
        let rest = rest.strip_suffix(".git").unwrap_or(rest);
        let (host, path) = rest.split_once(':')?;
        if host.is_empty() || path.is_empty() {
            return None;
        }
        return Some(format!("https://{host}/{path}"));
    }

    None
}
