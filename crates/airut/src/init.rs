use airut_core::errors::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct InitReport {
    pub root: PathBuf,
    pub created_dir: bool,
    pub created_readme: bool,
    pub created_config: bool,
}

/// Initialize Airut in the given directory.
///
/// Works directly in the provided root without walking up the directory
/// tree. The user must run it from their repository root.
pub fn init_at_root(root: &Path) -> Result<InitReport> {
    let dir = root.join(".airut");

    let mut created_dir = false;
    let mut created_readme = false;
    let mut created_config = false;

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
        created_dir = true;
    }

    let readme_path = dir.join("README.md");
    if !readme_path.exists() {
        fs::write(&readme_path, README_SNIPPET)?;
        created_readme = true;
    }

    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)?;
        created_config = true;
    }

    Ok(InitReport {
        root: root.to_path_buf(),
        created_dir,
        created_readme,
        created_config,
    })
}

const README_SNIPPET: &str = r#"# Airut

Announce releases to chat webhooks: commit and contributor statistics plus
the changelog, restructured into a notification card.

## Quick links
- Documentation: https://github.com/bruits/airut/blob/main/README.md
- Configuration: https://github.com/bruits/airut/blob/main/README.md#configuration
"#;

const DEFAULT_CONFIG: &str = r#"# Airut configuration
version = 1

[webhook]
# The chat webhook that receives release cards. Can also be provided with
# the AIRUT_WEBHOOK_URL environment variable or --webhook-url.
# url = "https://example.webhook.office.com/webhookb2/..."
# image_url = "https://example.com/logo.png"

[project]
# By default, Airut infers the repository from the git remote and the
# project name from the repository path.
# name = "my-project"
# repository = "https://github.com/owner/repo"

[contributors]
# Author names excluded from the contributor list.
# ignored = ["dependabot[bot]"]
"#;
