//! Project entity, status vocabulary, and draft rules.
//!
//! A project is either a [`ProjectDraft`] (new, no identifier, lives only in
//! a form) or a persisted [`Project`] carrying a remote-assigned
//! [`ProjectId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{ProjectId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of letters in a project prefix.
pub const MAX_PREFIX_LENGTH: usize = 5;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Project lifecycle status.
///
/// The vocabulary is closed: any other value on the wire is rejected when
/// decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

impl ProjectStatus {
    /// Every status, in display order.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Paused,
        ProjectStatus::Completed,
    ];

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Persisted record
// ---------------------------------------------------------------------------

/// A persisted project as returned by the remote collection.
///
/// The remote may label the short code `tag` (e.g. `WEB-0001`); it is read
/// into `prefix`, the single canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "tag")]
    pub prefix: String,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, alias = "tasksCount", skip_serializing_if = "Option::is_none")]
    pub tasks_count: Option<u32>,
    #[serde(default, alias = "completedTasks", skip_serializing_if = "Option::is_none")]
    pub completed_tasks: Option<u32>,
}

impl Project {
    /// Description text, treating an empty string the same as absent.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// The letter part of the prefix, without any generated sequence suffix.
    ///
    /// `WEB-0001` yields `WEB`; a plain `WEB` is returned unchanged.
    pub fn short_code(&self) -> &str {
        self.prefix
            .split_once('-')
            .map_or(self.prefix.as_str(), |(code, _)| code)
    }

    /// Completed-task percentage, rounded. Zero when no task counts are known.
    pub fn progress_percent(&self) -> u8 {
        match self.tasks_count {
            Some(total) if total > 0 => {
                let done = self.completed_tasks.unwrap_or(0).min(total);
                (f64::from(done) * 100.0 / f64::from(total)).round() as u8
            }
            _ => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// In-progress, not-yet-persisted project fields.
///
/// Serializes to the create/update request body
/// `{name, description, status, prefix}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub prefix: String,
}

impl ProjectDraft {
    /// Whether the draft may be submitted: name and prefix are non-blank.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.prefix.trim().is_empty()
    }

    /// Same rule as [`is_submittable`](Self::is_submittable), reporting the
    /// first failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Project name must not be empty".to_string(),
            ));
        }
        if self.prefix.trim().is_empty() {
            return Err(CoreError::Validation(
                "Project prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply prefix input, keeping the previous value when it is rejected.
    ///
    /// Returns `true` when the input was accepted.
    pub fn apply_prefix_input(&mut self, input: &str) -> bool {
        match normalize_prefix_input(input) {
            Some(prefix) => {
                self.prefix = prefix;
                true
            }
            None => false,
        }
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            status: project.status,
            prefix: conform_prefix(project.short_code()),
        }
    }
}

/// Normalize raw prefix input.
///
/// Accepts only ASCII letters (the empty string included) up to
/// [`MAX_PREFIX_LENGTH`] characters, returning the upper-cased value.
/// Anything else yields `None`.
pub fn normalize_prefix_input(input: &str) -> Option<String> {
    if input.chars().count() > MAX_PREFIX_LENGTH {
        return None;
    }
    if !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(input.to_ascii_uppercase())
}

/// Coerce a stored prefix into the input rule: ASCII letters only, at most
/// [`MAX_PREFIX_LENGTH`] of them, upper-cased.
///
/// Used when a persisted record seeds a draft, since the remote may hold
/// prefixes that predate the rule (`web2025` becomes `WEB`).
pub fn conform_prefix(stored: &str) -> String {
    stored
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(MAX_PREFIX_LENGTH)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn draft(name: &str, prefix: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            prefix: prefix.to_string(),
            ..ProjectDraft::default()
        }
    }

    // -- status ----------------------------------------------------------------

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn status_rejects_legacy_vocabulary() {
        assert!(serde_json::from_str::<ProjectStatus>("\"done\"").is_err());
        assert!(serde_json::from_str::<ProjectStatus>("\"archived\"").is_err());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Paused".parse::<ProjectStatus>(), Ok(ProjectStatus::Paused));
        assert_matches!(
            "done".parse::<ProjectStatus>(),
            Err(CoreError::UnknownStatus(s)) if s == "done"
        );
    }

    #[test]
    fn default_status_is_active() {
        assert_eq!(ProjectDraft::default().status, ProjectStatus::Active);
    }

    // -- submittable -----------------------------------------------------------

    #[test]
    fn submittable_requires_name_and_prefix() {
        assert!(draft("Site", "AB").is_submittable());
        assert!(!draft("", "AB").is_submittable());
        assert!(!draft("Site", "").is_submittable());
        assert!(!draft("   ", "AB").is_submittable());
        assert!(!draft("Site", "  ").is_submittable());
    }

    #[test]
    fn submittable_agrees_with_validate() {
        let cases = [
            ("Site", "AB"),
            ("", "DEV"),
            (" ", "DEV"),
            ("Site", ""),
            ("\tx\n", "Q"),
        ];
        for (name, prefix) in cases {
            let d = draft(name, prefix);
            assert_eq!(d.is_submittable(), d.validate().is_ok(), "{name:?}/{prefix:?}");
        }
    }

    #[test]
    fn validate_reports_name_first() {
        assert_matches!(
            draft("", "").validate(),
            Err(CoreError::Validation(msg)) if msg.contains("name")
        );
    }

    // -- prefix input ----------------------------------------------------------

    #[test]
    fn prefix_input_is_uppercased() {
        assert_eq!(normalize_prefix_input("ab"), Some("AB".to_string()));
        assert_eq!(normalize_prefix_input("dEv"), Some("DEV".to_string()));
        assert_eq!(normalize_prefix_input(""), Some(String::new()));
    }

    #[test]
    fn prefix_input_rejects_non_letters() {
        assert_eq!(normalize_prefix_input("a1"), None);
        assert_eq!(normalize_prefix_input("a-b"), None);
        assert_eq!(normalize_prefix_input("a b"), None);
        assert_eq!(normalize_prefix_input("é"), None);
    }

    #[test]
    fn prefix_input_is_capped() {
        assert_eq!(normalize_prefix_input("abcde"), Some("ABCDE".to_string()));
        assert_eq!(normalize_prefix_input("abcdef"), None);
    }

    #[test]
    fn rejected_prefix_input_keeps_previous_value() {
        let mut d = draft("Site", "AB");
        assert!(!d.apply_prefix_input("AB1"));
        assert_eq!(d.prefix, "AB");
        assert!(d.apply_prefix_input("abc"));
        assert_eq!(d.prefix, "ABC");
    }

    // -- persisted record ------------------------------------------------------

    #[test]
    fn project_reads_tag_as_prefix() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": "7f1c",
            "name": "Website",
            "description": "",
            "tag": "WEB-0003",
            "status": "paused",
            "created_at": "2025-01-10T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(project.prefix, "WEB-0003");
        assert_eq!(project.short_code(), "WEB");
        assert_eq!(project.description_text(), None);
        assert!(project.created_at.is_some());
    }

    #[test]
    fn draft_from_project_uses_short_code() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "Mobile",
            "description": "App",
            "tag": "mob-0001",
            "status": "completed"
        }))
        .unwrap();

        let d = ProjectDraft::from(&project);
        assert_eq!(d.prefix, "MOB");
        assert_eq!(d.description, "App");
        assert_eq!(d.status, ProjectStatus::Completed);
    }

    #[test]
    fn draft_from_project_conforms_legacy_prefix() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": "1", "name": "Site", "prefix": "web2025", "status": "active"
        }))
        .unwrap();

        let d = ProjectDraft::from(&project);
        assert_eq!(d.prefix, "WEB");
        assert_eq!(normalize_prefix_input(&d.prefix), Some("WEB".to_string()));
    }

    #[test]
    fn conform_prefix_caps_and_strips() {
        assert_eq!(conform_prefix("abcdefgh"), "ABCDE");
        assert_eq!(conform_prefix("a1b2"), "AB");
        assert_eq!(conform_prefix("2025"), "");
    }

    #[test]
    fn progress_percent_rounds_and_handles_missing_counts() {
        let mut project: Project = serde_json::from_value(serde_json::json!({
            "id": "1", "name": "A", "prefix": "A", "status": "active"
        }))
        .unwrap();
        assert_eq!(project.progress_percent(), 0);

        project.tasks_count = Some(3);
        project.completed_tasks = Some(2);
        assert_eq!(project.progress_percent(), 67);

        project.tasks_count = Some(0);
        assert_eq!(project.progress_percent(), 0);
    }

    #[test]
    fn draft_serializes_to_request_body() {
        let body = serde_json::to_value(draft("Site", "AB")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Site",
                "description": "",
                "status": "active",
                "prefix": "AB"
            })
        );
    }
}
