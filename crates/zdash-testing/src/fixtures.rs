//! Builders for domain fixtures.
//!
//! Defaults describe an active `web` project with no workflow status and no
//! linked styleguide, so tests only spell out what they care about.

use zdash_types::{
    Project, ProjectId, ResourceStatus, Styleguide, StyleguideId, StyleguideRef, WorkflowStatus,
};

pub struct ProjectBuilder {
    project: Project,
}

/// Start an active `web` project named after its id
pub fn project(id: &str) -> ProjectBuilder {
    ProjectBuilder {
        project: Project {
            id: ProjectId::from(id),
            name: format!("Project {}", id),
            platform: "web".to_string(),
            status: ResourceStatus::Active,
            workflow_status: None,
            number_of_members: 1,
            number_of_screens: 0,
            linked_styleguide: None,
            created: None,
            updated: None,
        },
    }
}

impl ProjectBuilder {
    pub fn name(mut self, name: &str) -> Self {
        self.project.name = name.to_string();
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.project.platform = platform.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.project.status = ResourceStatus::from(status);
        self
    }

    pub fn archived(self) -> Self {
        self.status("archived")
    }

    pub fn workflow(mut self, name: &str) -> Self {
        self.project.workflow_status = Some(WorkflowStatus {
            name: name.to_string(),
        });
        self
    }

    pub fn members(mut self, count: u32) -> Self {
        self.project.number_of_members = count;
        self
    }

    pub fn screens(mut self, count: u32) -> Self {
        self.project.number_of_screens = count;
        self
    }

    pub fn linked_to(mut self, styleguide_id: &str) -> Self {
        self.project.linked_styleguide = Some(StyleguideRef {
            id: StyleguideId::from(styleguide_id),
        });
        self
    }

    pub fn updated(mut self, unix_secs: i64) -> Self {
        self.project.updated = Some(unix_secs);
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}

pub struct StyleguideBuilder {
    styleguide: Styleguide,
}

/// Start an active styleguide
pub fn styleguide(id: &str, name: &str) -> StyleguideBuilder {
    StyleguideBuilder {
        styleguide: Styleguide {
            id: StyleguideId::from(id),
            name: name.to_string(),
            status: ResourceStatus::Active,
            platform: None,
        },
    }
}

impl StyleguideBuilder {
    pub fn archived(mut self) -> Self {
        self.styleguide.status = ResourceStatus::Archived;
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.styleguide.platform = Some(platform.to_string());
        self
    }

    pub fn build(self) -> Styleguide {
        self.styleguide
    }
}

/// `count` projects on one platform, ids `{prefix}-0000`, `{prefix}-0001`, ...
pub fn numbered_projects(prefix: &str, count: usize, platform: &str, active: bool) -> Vec<Project> {
    (0..count)
        .map(|n| {
            let builder = project(&format!("{}-{:04}", prefix, n)).platform(platform);
            if active {
                builder.build()
            } else {
                builder.archived().build()
            }
        })
        .collect()
}
