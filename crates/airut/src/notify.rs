use crate::cli::NotifyArgs;
use crate::ui;
use airut_core::config::Config;
use airut_core::errors::{self, AirutError, Result};
use airut_core::types::ReleaseInfo;
use airut_core::{
    aggregate_contributors, classify_release, compose_notification, extract_sections, git,
    render_notification, send_notification,
};
use std::fs;
use std::path::Path;

pub fn run(args: &NotifyArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    run_in(&cwd, args)
}

pub fn run_in(root: &Path, args: &NotifyArgs) -> Result<()> {
    let config = Config::load(root)?;

    let changelog_path = if args.changelog.is_absolute() {
        args.changelog.clone()
    } else {
        root.join(&args.changelog)
    };
    let changelog = fs::read_to_string(&changelog_path)
        .map_err(|e| errors::io_error_with_path(e, &changelog_path))?;

    let previous = args.previous_tag.as_deref();
    // A dry run inspects the window up to HEAD: the tag may not exist yet
    let current = if args.dry_run { "HEAD" } else { args.tag.as_str() };

    let commits = git::commit_count(root, previous, current)?;
    let log_lines = git::contributor_log_lines(root, previous, current)?;
    let contributors = aggregate_contributors(
        log_lines.iter().map(|line| line.as_str()),
        &config.ignored_contributors,
    );
    let sections = extract_sections(&changelog);

    if let Some(previous) = previous
        && let Err(e) = classify_release(previous, &args.tag)
    {
        ui::log_warning(&format!(
            "Could not classify the release type, omitting it: {e}"
        ));
    }

    let repository_url = git::detect_repository(root, config.repository.as_deref())
        .ok_or_else(|| {
            AirutError::Config(
                "repository URL could not be determined; set [project].repository".into(),
            )
        })?;
    let project_name = match &config.project_name {
        Some(name) => name.clone(),
        None => project_name_from_repository(&repository_url),
    };

    let release = ReleaseInfo {
        tag: args.tag.clone(),
        previous_tag: args.previous_tag.clone(),
        repository_url,
        project_name,
        image_url: config.image_url.clone(),
    };

    let payload = compose_notification(&release, commits, &contributors, &sections);

    if args.dry_run {
        println!("{}", render_notification(&payload)?);
        ui::log_hint("Dry-run: payload printed, nothing sent.");
        return Ok(());
    }

    let webhook_url = resolve_webhook_url(args, &config)?;
    send_notification(&webhook_url, &payload)?;
    ui::log_success_value("Notification sent for", &args.tag);
    Ok(())
}

/// The last path segment of the repository URL names the project.
fn project_name_from_repository(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

/// CLI flag beats the environment, which beats the config file.
fn resolve_webhook_url(args: &NotifyArgs, config: &Config) -> Result<String> {
    if let Some(url) = &args.webhook_url {
        return Ok(url.clone());
    }
    if let Ok(url) = std::env::var("AIRUT_WEBHOOK_URL")
        && !url.trim().is_empty()
    {
        return Ok(url.trim().to_string());
    }
    if let Some(url) = &config.webhook_url {
        return Ok(url.clone());
    }
    Err(AirutError::Config(
        "no webhook URL configured; set [webhook].url, AIRUT_WEBHOOK_URL, or pass --webhook-url"
            .into(),
    ))
}
