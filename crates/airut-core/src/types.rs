use serde::Serialize;
use std::str::FromStr;

/// Semantic release classifications, ordered by impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReleaseType {
    Patch,
    Minor,
    Major,
}

impl ReleaseType {
    /// Parse a release type from a string (convenient method that returns Option)
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Convert release type to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(()),
        }
    }
}

/// A deduplicated commit author from one release's log window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// A named group of changes derived from one changelog heading and the list
/// that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub changes: String,
}

/// One name/value row in the notification card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

/// One free-text block in the notification card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    pub text: String,
}

/// The structured message sent to the chat webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub summary: String,
    pub theme_color: String,
    pub activity_title: String,
    pub activity_subtitle: String,
    pub activity_image: String,
    pub facts: Vec<Fact>,
    pub sections: Vec<SectionBlock>,
}

/// Release metadata supplied by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// The tag that was just released
    pub tag: String,
    /// The previously released tag, absent for a first release
    pub previous_tag: Option<String>,
    /// Browse URL of the repository (`https://{host}/{path}`)
    pub repository_url: String,
    pub project_name: String,
    /// Overrides the default activity image when set
    pub image_url: Option<String>,
}
