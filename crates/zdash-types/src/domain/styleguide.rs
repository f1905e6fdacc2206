use serde::{Deserialize, Serialize};

use super::ids::StyleguideId;
use super::status::ResourceStatus;

/// Base URL of the web app page for a styleguide
pub const STYLEGUIDE_WEB_URL: &str = "https://app.zeplin.io/styleguide";

/// A shared design-system resource projects can link to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Styleguide {
    pub id: StyleguideId,
    pub name: String,
    pub status: ResourceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl Styleguide {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Web app link for a styleguide id
pub fn styleguide_url(id: &StyleguideId) -> String {
    format!("{}/{}", STYLEGUIDE_WEB_URL, id)
}
