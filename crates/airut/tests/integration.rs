use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Build the airut binary and return its path
fn get_cli_binary() -> PathBuf {
    // Use CARGO_MANIFEST_DIR to find our crate directory, then navigate to workspace root
    let crate_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set during tests");
    let workspace_root = Path::new(&crate_dir)
        .parent()
        .and_then(|p| p.parent())
        .expect("Expected to find workspace root")
        .to_path_buf();

    let output = Command::new("cargo")
        .args(["build", "--bin", "airut"])
        .current_dir(&workspace_root)
        .output()
        .expect("Failed to build airut");

    if !output.status.success() {
        panic!(
            "Failed to build binary: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let full_path = workspace_root.join("target/debug/airut");
    if !full_path.exists() {
        panic!("Binary not found at expected path: {}", full_path.display());
    }

    full_path
}

fn run_cli(args: &[&str], working_dir: &Path) -> std::process::Output {
    let binary = get_cli_binary();
    let mut cmd = Command::new(&binary);
    cmd.args(args).current_dir(working_dir);
    // Keep webhook resolution deterministic regardless of the outer shell
    cmd.env_remove("AIRUT_WEBHOOK_URL");
    cmd.output().expect("Failed to execute airut binary")
}

fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn setup_repo(repo: &Path) {
    git(repo, &["init"]);
    git(repo, &["config", "user.name", "Test User"]);
    git(repo, &["config", "user.email", "test@example.com"]);
    git(
        repo,
        &["remote", "add", "origin", "https://github.com/bruits/demo.git"],
    );

    fs::write(repo.join("a.txt"), "first").unwrap();
    git(repo, &["add", "a.txt"]);
    git(repo, &["commit", "-m", "first"]);
    git(repo, &["tag", "v1.0.0"]);

    fs::write(repo.join("b.txt"), "second").unwrap();
    git(repo, &["add", "b.txt"]);
    git(repo, &["commit", "-m", "second"]);

    fs::write(
        repo.join("RELEASE_NOTES.md"),
        "### Features\n- Add X\n- Add Y\n\n### Fixes\n- Fix Z\n",
    )
    .unwrap();
}

#[test]
fn notify_dry_run_prints_the_composed_payload() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let repo = temp.path();
    setup_repo(repo);

    let output = run_cli(
        &[
            "notify",
            "--tag",
            "1.1.0",
            "--previous-tag",
            "v1.0.0",
            "--changelog",
            "RELEASE_NOTES.md",
            "--dry-run",
        ],
        repo,
    );

    assert!(
        output.status.success(),
        "dry run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""summary": "Released 1.1.0 for demo""#));
    assert!(stdout.contains(r#""themeColor": "2C5697""#));
    assert!(stdout.contains(r#""activitySubtitle": "https://github.com/bruits/demo""#));
    assert!(stdout.contains(r#""value": "Test User""#));
    assert!(stdout.contains(r###""text": "## Features""###));
    // The change list keeps its first line and uses \r before later bullets
    assert!(stdout.contains(r#""text": "- Add X\r- Add Y""#));
    assert!(stdout.contains(r###""text": "## Fixes""###));
}

#[test]
fn notify_without_webhook_url_fails_with_a_clear_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let repo = temp.path();
    setup_repo(repo);

    let output = run_cli(
        &[
            "notify",
            "--tag",
            "1.1.0",
            "--previous-tag",
            "v1.0.0",
            "--changelog",
            "RELEASE_NOTES.md",
        ],
        repo,
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no webhook URL configured"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn notify_fails_outside_a_repository() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("RELEASE_NOTES.md"), "### Fixes\n- Fix Z\n").unwrap();

    let output = run_cli(
        &[
            "notify",
            "--tag",
            "1.0.0",
            "--changelog",
            "RELEASE_NOTES.md",
            "--dry-run",
        ],
        temp.path(),
    );

    assert!(!output.status.success());
}
