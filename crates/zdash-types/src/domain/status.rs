use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status shared by projects and styleguides.
///
/// Values the API may add later are kept in `Other` so a new status never
/// breaks decoding of a whole page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceStatus {
    Active,
    Archived,
    Deleted,
    Other(String),
}

impl ResourceStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ResourceStatus::Active)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResourceStatus::Active => "active",
            ResourceStatus::Archived => "archived",
            ResourceStatus::Deleted => "deleted",
            ResourceStatus::Other(value) => value,
        }
    }
}

impl From<String> for ResourceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => ResourceStatus::Active,
            "archived" => ResourceStatus::Archived,
            "deleted" => ResourceStatus::Deleted,
            _ => ResourceStatus::Other(value),
        }
    }
}

impl From<&str> for ResourceStatus {
    fn from(value: &str) -> Self {
        ResourceStatus::from(value.to_string())
    }
}

impl From<ResourceStatus> for String {
    fn from(status: ResourceStatus) -> Self {
        match status {
            ResourceStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
