use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use zdash_types::{Project, Styleguide};

/// Projects whose status is `active`, in arrival order
pub fn active_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.is_active()).collect()
}

/// Styleguides whose status is `active`, in arrival order
pub fn active_styleguides(styleguides: &[Styleguide]) -> Vec<&Styleguide> {
    styleguides.iter().filter(|s| s.is_active()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCount {
    pub platform: String,
    pub count: usize,
}

/// Occurrences per platform, ordered by first appearance of each platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformCounts {
    entries: Vec<PlatformCount>,
}

impl PlatformCounts {
    pub fn get(&self, platform: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.platform == platform)
            .map(|e| e.count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlatformCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlatformCounts {
    type Item = &'a PlatformCount;
    type IntoIter = std::slice::Iter<'a, PlatformCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as an object so JSON consumers get `{"web": 3, "ios": 1}`
impl Serialize for PlatformCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.platform, &entry.count)?;
        }
        map.end()
    }
}

/// Count projects per platform over the full collection.
///
/// Inactive projects are included here even though the table and the link
/// chart only look at active ones.
pub fn platform_counts(projects: &[Project]) -> PlatformCounts {
    let mut entries: Vec<PlatformCount> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for project in projects {
        match position.get(project.platform.as_str()) {
            Some(&idx) => entries[idx].count += 1,
            None => {
                position.insert(project.platform.as_str(), entries.len());
                entries.push(PlatformCount {
                    platform: project.platform.clone(),
                    count: 1,
                });
            }
        }
    }

    PlatformCounts { entries }
}

/// Split of active projects by presence of a linked styleguide reference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct LinkPartition {
    pub linked: usize,
    pub unlinked: usize,
}

impl LinkPartition {
    pub fn total(&self) -> usize {
        self.linked + self.unlinked
    }
}

/// Partition by whether the reference field is present, not whether it
/// resolves to a known styleguide.
pub fn link_partition(projects: &[&Project]) -> LinkPartition {
    let linked = projects
        .iter()
        .filter(|p| p.linked_styleguide.is_some())
        .count();

    LinkPartition {
        linked,
        unlinked: projects.len() - linked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zdash_types::{ProjectId, ResourceStatus, StyleguideId, StyleguideRef};

    fn project(id: &str, platform: &str, status: &str, link: Option<&str>) -> Project {
        Project {
            id: ProjectId::from(id),
            name: format!("Project {}", id),
            platform: platform.to_string(),
            status: ResourceStatus::from(status),
            workflow_status: None,
            number_of_members: 1,
            number_of_screens: 1,
            linked_styleguide: link.map(|sg| StyleguideRef {
                id: StyleguideId::from(sg),
            }),
            created: None,
            updated: None,
        }
    }

    #[test]
    fn test_platform_counts_first_occurrence_order() {
        let projects = vec![
            project("1", "ios", "active", None),
            project("2", "web", "active", None),
            project("3", "ios", "archived", None),
            project("4", "android", "active", None),
            project("5", "web", "active", None),
        ];

        let counts = platform_counts(&projects);
        let order: Vec<(&str, usize)> = counts
            .iter()
            .map(|e| (e.platform.as_str(), e.count))
            .collect();
        assert_eq!(order, vec![("ios", 2), ("web", 2), ("android", 1)]);
        assert_eq!(counts.total(), projects.len());
    }

    #[test]
    fn test_platform_counts_include_inactive() {
        let projects = vec![
            project("1", "web", "archived", None),
            project("2", "web", "deleted", None),
        ];

        let counts = platform_counts(&projects);
        assert_eq!(counts.get("web"), Some(2));
        assert!(active_projects(&projects).is_empty());
    }

    #[test]
    fn test_platform_counts_empty() {
        let counts = platform_counts(&[]);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get("web"), None);
    }

    #[test]
    fn test_platform_counts_serialize_in_order() {
        let projects = vec![
            project("1", "macos", "active", None),
            project("2", "android", "active", None),
            project("3", "macos", "active", None),
        ];

        let json = serde_json::to_string(&platform_counts(&projects)).unwrap();
        assert_eq!(json, r#"{"macos":2,"android":1}"#);
    }

    #[test]
    fn test_link_partition_sums_to_active() {
        let projects = vec![
            project("1", "web", "active", Some("sg1")),
            project("2", "web", "active", None),
            project("3", "web", "archived", Some("sg1")),
            project("4", "ios", "active", Some("sg-missing")),
        ];

        let active = active_projects(&projects);
        let partition = link_partition(&active);
        assert_eq!(partition.linked, 2);
        assert_eq!(partition.unlinked, 1);
        assert_eq!(partition.total(), active.len());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let projects = vec![
            project("1", "web", "active", Some("sg1")),
            project("2", "ios", "archived", None),
        ];

        let first = (
            platform_counts(&projects),
            link_partition(&active_projects(&projects)),
        );
        let second = (
            platform_counts(&projects),
            link_partition(&active_projects(&projects)),
        );
        assert_eq!(first, second);
    }
}
