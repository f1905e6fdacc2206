use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use zdash_types::{Project, ProjectId, Styleguide, StyleguideId, styleguide_url};

/// Lookup of styleguide names by id.
///
/// Built from the active styleguides only, so a link to an archived
/// styleguide does not resolve.
#[derive(Debug, Default)]
pub struct StyleguideIndex<'a> {
    by_id: HashMap<&'a StyleguideId, &'a Styleguide>,
}

impl<'a> StyleguideIndex<'a> {
    pub fn new(styleguides: &[&'a Styleguide]) -> Self {
        let mut by_id = HashMap::with_capacity(styleguides.len());
        for styleguide in styleguides {
            // First occurrence wins when the API repeats an id across pages
            by_id.entry(&styleguide.id).or_insert(*styleguide);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &StyleguideId) -> Option<&'a Styleguide> {
        self.by_id.get(id).copied()
    }

    pub fn name_of(&self, id: &StyleguideId) -> Option<&'a str> {
        self.get(id).map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// One table row: a project plus the resolved name of its linked styleguide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub project_id: ProjectId,
    pub name: String,
    pub platform: String,
    pub workflow_status: Option<String>,
    pub member_count: u32,
    pub screen_count: u32,
    pub linked_styleguide_id: Option<StyleguideId>,
    /// `None` when there is no link or the link points outside the active set
    pub styleguide_name: Option<String>,
    pub styleguide_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl DisplayRow {
    pub fn from_project(project: &Project, index: &StyleguideIndex<'_>) -> Self {
        let linked = project.linked_styleguide_id();

        Self {
            project_id: project.id.clone(),
            name: project.name.clone(),
            platform: project.platform.clone(),
            workflow_status: project.workflow_status_name().map(str::to_string),
            member_count: project.number_of_members,
            screen_count: project.number_of_screens,
            linked_styleguide_id: linked.cloned(),
            styleguide_name: linked
                .and_then(|id| index.name_of(id))
                .map(str::to_string),
            styleguide_url: linked.map(styleguide_url),
            updated_at: project.updated_at(),
        }
    }

    pub fn has_link(&self) -> bool {
        self.linked_styleguide_id.is_some()
    }

    /// Linked, but the styleguide is not among the active ones
    pub fn is_unresolved_link(&self) -> bool {
        self.has_link() && self.styleguide_name.is_none()
    }
}

/// Build display rows in project order
pub fn build_display_rows(projects: &[&Project], index: &StyleguideIndex<'_>) -> Vec<DisplayRow> {
    projects
        .iter()
        .map(|project| DisplayRow::from_project(project, index))
        .collect()
}
