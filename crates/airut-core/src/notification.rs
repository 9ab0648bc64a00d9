//! Notification payload composition.
//!
//! `compose_notification` is a pure function: identical inputs produce
//! byte-identical JSON, and the ordering of facts and section blocks is part
//! of the contract.

use crate::types::{Contributor, Fact, NotificationPayload, ReleaseInfo, Section, SectionBlock};
use crate::version::classify_release;

const THEME_COLOR: &str = "2C5697";

/// Activity image used when the host configures no override.
const DEFAULT_ACTIVITY_IMAGE: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4e/Gitlab_meaningful_logo.svg/144px-Gitlab_meaningful_logo.svg.png";

/// Compose the notification payload for one release.
///
/// A tag pair that cannot be classified (no previous tag, an unparseable
/// tag, or a re-tag with equal components) keeps the Version fact but omits
/// the classification suffix; composition never aborts over it.
pub fn compose_notification(
    release: &ReleaseInfo,
    commit_count: u64,
    contributors: &[Contributor],
    sections: &[Section],
) -> NotificationPayload {
    NotificationPayload {
        summary: format!("Released {} for {}", release.tag, release.project_name),
        theme_color: THEME_COLOR.to_string(),
        activity_title: format!(
            "🚀🚀 A new version for {} has been released 🚀🚀",
            release.project_name
        ),
        activity_subtitle: release.repository_url.clone(),
        activity_image: release
            .image_url
            .clone()
            .unwrap_or_else(|| DEFAULT_ACTIVITY_IMAGE.to_string()),
        facts: build_facts(release, commit_count, contributors),
        sections: build_sections(contributors, sections),
    }
}

fn build_facts(
    release: &ReleaseInfo,
    commit_count: u64,
    contributors: &[Contributor],
) -> Vec<Fact> {
    let mut facts = Vec::new();

    facts.push(Fact {
        name: "Version".to_string(),
        value: version_fact_value(release),
    });

    if let Some(previous) = &release.previous_tag {
        facts.push(Fact {
            name: "Last Release".to_string(),
            value: previous.clone(),
        });
    }

    facts.push(Fact {
        name: "Commits".to_string(),
        value: commit_count.to_string(),
    });

    if commit_count > 0 {
        let names = contributors
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        facts.push(Fact {
            name: "Contributors".to_string(),
            value: names,
        });
    }

    facts
}

/// The Version fact value: the released tag, annotated with the release
/// type when the tag pair classifies.
fn version_fact_value(release: &ReleaseInfo) -> String {
    let classification = release
        .previous_tag
        .as_deref()
        .and_then(|previous| classify_release(previous, &release.tag).ok().flatten());

    match classification {
        Some(release_type) => format!("{} ({})", release.tag, release_type),
        None => release.tag.clone(),
    }
}

fn build_sections(contributors: &[Contributor], sections: &[Section]) -> Vec<SectionBlock> {
    let mut blocks = Vec::new();

    if !contributors.is_empty() {
        let avatars = contributors
            .iter()
            .map(|c| format!("![]({})", c.avatar_url))
            .collect::<Vec<_>>()
            .join(" ");
        blocks.push(SectionBlock { text: avatars });
    }

    if !sections.is_empty() {
        blocks.push(SectionBlock {
            text: "---".to_string(),
        });
    }

    for section in sections {
        blocks.push(SectionBlock {
            text: format!("## {}", section.name),
        });
        // The destination renderer breaks lines on carriage returns
        blocks.push(SectionBlock {
            text: section.changes.replace("\n-", "\r-"),
        });
    }

    blocks
}
