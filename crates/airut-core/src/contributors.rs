//! Contributor aggregation over one release's commit-log window.

use crate::types::Contributor;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Gravatar thumbnail size used in the notification card.
const AVATAR_SIZE: u32 = 24;

/// Raw author record as emitted by the git log format string
#[derive(Debug, Deserialize)]
struct RawContributor {
    name: String,
    email: String,
}

/// Deduplicate and filter raw author records.
///
/// Each line is expected to decode as a `{"name", "email"}` JSON record.
/// Lines that do not decode are dropped silently; the log-window boundaries
/// routinely produce empty or partial lines. Deduplication is by email and
/// keeps the first occurrence, so the result preserves input order.
pub fn aggregate_contributors<'a, I>(log_lines: I, ignored_names: &[String]) -> Vec<Contributor>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen_emails: FxHashSet<String> = FxHashSet::default();
    let mut contributors = Vec::new();

    for line in log_lines {
        let Ok(raw) = serde_json::from_str::<RawContributor>(line.trim()) else {
            continue;
        };
        if raw.name.is_empty() || raw.email.is_empty() {
            continue;
        }
        if !seen_emails.insert(raw.email.clone()) {
            continue;
        }
        if ignored_names.iter().any(|ignored| ignored == &raw.name) {
            continue;
        }
        let avatar_url = gravatar_url(&raw.email);
        contributors.push(Contributor {
            name: raw.name,
            email: raw.email,
            avatar_url,
        });
    }

    contributors
}

/// Deterministic gravatar URL for an email address.
///
/// Gravatar addresses are hashed from the trimmed, lowercased email.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    let mut hash = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hash, "{byte:02x}");
    }
    format!("https://www.gravatar.com/avatar/{hash}?s={AVATAR_SIZE}")
}
