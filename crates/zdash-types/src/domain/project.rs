use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ProjectId, StyleguideId};
use super::status::ResourceStatus;

/// A project as returned by the workspace project listing.
///
/// Only the fields the dashboard uses are mapped; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Target technology tag (`web`, `ios`, `android`, `macos`, ...)
    pub platform: String,
    pub status: ResourceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_status: Option<WorkflowStatus>,
    #[serde(default)]
    pub number_of_members: u32,
    #[serde(default)]
    pub number_of_screens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_styleguide: Option<StyleguideRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Linked styleguide id, if the project carries a reference at all
    pub fn linked_styleguide_id(&self) -> Option<&StyleguideId> {
        self.linked_styleguide.as_ref().map(|link| &link.id)
    }

    pub fn workflow_status_name(&self) -> Option<&str> {
        self.workflow_status.as_ref().map(|ws| ws.name.as_str())
    }

    /// Last update time; falls back to creation time
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated
            .or(self.created)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStatus {
    pub name: String,
}

/// Reference from a project to the styleguide it is linked to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleguideRef {
    pub id: StyleguideId,
}
