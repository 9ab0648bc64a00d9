use crate::errors::{AirutError, Result};
use crate::types::ReleaseType;
use semver::Version;

/// Classify the bump between two version tags.
///
/// The comparison is purely numeric, component by component: major first,
/// then minor, then patch. Equal triples yield `Ok(None)`: a re-tag is a
/// legitimate edge case that carries no classification, not an error.
pub fn classify_release(previous: &str, current: &str) -> Result<Option<ReleaseType>> {
    let previous = parse_tag(previous)?;
    let current = parse_tag(current)?;

    if current.major != previous.major {
        Ok(Some(ReleaseType::Major))
    } else if current.minor != previous.minor {
        Ok(Some(ReleaseType::Minor))
    } else if current.patch != previous.patch {
        Ok(Some(ReleaseType::Patch))
    } else {
        Ok(None)
    }
}

/// Parse a version tag, tolerating the common `v` prefix.
fn parse_tag(tag: &str) -> Result<Version> {
    let trimmed = tag.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(bare).map_err(|e| AirutError::InvalidVersionFormat(format!("{tag}: {e}")))
}
