//! Status badge presentation.
//!
//! Maps a [`ProjectStatus`] to the label / tone / icon triple a view uses to
//! render badges and card accents.

use crate::project::ProjectStatus;

/// Visual category of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Info,
}

/// Icon shown next to the badge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Chart,
    PauseCircle,
    CheckCircle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
    pub icon: StatusIcon,
}

impl ProjectStatus {
    pub fn badge(self) -> StatusBadge {
        match self {
            ProjectStatus::Active => StatusBadge {
                label: "Active",
                tone: BadgeTone::Success,
                icon: StatusIcon::Chart,
            },
            ProjectStatus::Paused => StatusBadge {
                label: "Paused",
                tone: BadgeTone::Warning,
                icon: StatusIcon::PauseCircle,
            },
            ProjectStatus::Completed => StatusBadge {
                label: "Completed",
                tone: BadgeTone::Info,
                icon: StatusIcon::CheckCircle,
            },
        }
    }
}
