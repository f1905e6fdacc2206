use once_cell::sync::OnceCell;
use serde::Serialize;
use zdash_types::{Project, Styleguide};

use crate::aggregate::{
    LinkPartition, PlatformCounts, active_projects, active_styleguides, link_partition,
    platform_counts,
};
use crate::rows::{DisplayRow, StyleguideIndex, build_display_rows};

/// Both fetched collections plus their derived views.
///
/// The collections are never mutated after construction, so each derived
/// view is computed on first access and reused afterwards.
#[derive(Debug, Clone)]
pub struct Dashboard {
    projects: Vec<Project>,
    styleguides: Vec<Styleguide>,
    platform_counts: OnceCell<PlatformCounts>,
    link_partition: OnceCell<LinkPartition>,
    rows: OnceCell<Vec<DisplayRow>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub active_projects: usize,
    pub inactive_projects: usize,
    pub total_styleguides: usize,
    pub active_styleguides: usize,
    pub unresolved_links: usize,
}

impl Dashboard {
    pub fn new(projects: Vec<Project>, styleguides: Vec<Styleguide>) -> Self {
        Self {
            projects,
            styleguides,
            platform_counts: OnceCell::new(),
            link_partition: OnceCell::new(),
            rows: OnceCell::new(),
        }
    }

    /// Every fetched project, including inactive ones
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Every fetched styleguide, including inactive ones
    pub fn styleguides(&self) -> &[Styleguide] {
        &self.styleguides
    }

    pub fn active_projects(&self) -> Vec<&Project> {
        active_projects(&self.projects)
    }

    pub fn active_styleguides(&self) -> Vec<&Styleguide> {
        active_styleguides(&self.styleguides)
    }

    pub fn platform_counts(&self) -> &PlatformCounts {
        self.platform_counts.get_or_init(|| {
            tracing::trace!(projects = self.projects.len(), "computing platform counts");
            platform_counts(&self.projects)
        })
    }

    pub fn link_partition(&self) -> LinkPartition {
        *self
            .link_partition
            .get_or_init(|| link_partition(&self.active_projects()))
    }

    /// Display rows for active projects, in fetch order
    pub fn rows(&self) -> &[DisplayRow] {
        self.rows.get_or_init(|| {
            let styleguides = self.active_styleguides();
            let index = StyleguideIndex::new(&styleguides);
            tracing::trace!(
                styleguides = index.len(),
                "building display rows against active styleguides"
            );
            build_display_rows(&self.active_projects(), &index)
        })
    }

    pub fn summary(&self) -> DashboardSummary {
        let rows = self.rows();
        let active_styleguides = self
            .styleguides
            .iter()
            .filter(|s| s.is_active())
            .count();

        DashboardSummary {
            total_projects: self.projects.len(),
            active_projects: rows.len(),
            inactive_projects: self.projects.len() - rows.len(),
            total_styleguides: self.styleguides.len(),
            active_styleguides,
            unresolved_links: rows.iter().filter(|r| r.is_unresolved_link()).count(),
        }
    }
}
