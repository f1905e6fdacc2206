//! In-memory organization served page by page.

use std::sync::Mutex;
use zdash_client::{Error, OrganizationApi, PageRequest, Result};
use zdash_types::{OrganizationId, Project, Styleguide};

/// Paginated fake of the organization listings.
///
/// Records every page request so tests can assert on request counts, and
/// can be told to fail at a given page index of either listing.
pub struct FakeOrganization {
    id: OrganizationId,
    projects: Vec<Project>,
    styleguides: Vec<Styleguide>,
    fail_projects_at: Option<usize>,
    fail_styleguides_at: Option<usize>,
    project_requests: Mutex<Vec<PageRequest>>,
    styleguide_requests: Mutex<Vec<PageRequest>>,
}

impl FakeOrganization {
    pub fn new(id: &str) -> Self {
        Self {
            id: OrganizationId::from(id),
            projects: Vec::new(),
            styleguides: Vec::new(),
            fail_projects_at: None,
            fail_styleguides_at: None,
            project_requests: Mutex::new(Vec::new()),
            styleguide_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &OrganizationId {
        &self.id
    }

    pub fn with_projects(mut self, projects: impl IntoIterator<Item = Project>) -> Self {
        self.projects.extend(projects);
        self
    }

    pub fn with_styleguides(mut self, styleguides: impl IntoIterator<Item = Styleguide>) -> Self {
        self.styleguides.extend(styleguides);
        self
    }

    /// Answer the `page_index`-th project request (0-based) with HTTP 500
    pub fn fail_projects_at_page(mut self, page_index: usize) -> Self {
        self.fail_projects_at = Some(page_index);
        self
    }

    /// Answer the `page_index`-th styleguide request (0-based) with HTTP 500
    pub fn fail_styleguides_at_page(mut self, page_index: usize) -> Self {
        self.fail_styleguides_at = Some(page_index);
        self
    }

    pub fn project_requests(&self) -> Vec<PageRequest> {
        lock(&self.project_requests).clone()
    }

    pub fn styleguide_requests(&self) -> Vec<PageRequest> {
        lock(&self.styleguide_requests).clone()
    }

    fn serve<T: Clone>(
        &self,
        organization: &OrganizationId,
        items: &[T],
        log: &Mutex<Vec<PageRequest>>,
        fail_at: Option<usize>,
        page: PageRequest,
    ) -> Result<Vec<T>> {
        let page_index = {
            let mut requests = lock(log);
            requests.push(page);
            requests.len() - 1
        };

        if organization != &self.id {
            return Err(Error::Response {
                status: 404,
                body: format!("organization {} not found", organization),
            });
        }

        if fail_at == Some(page_index) {
            return Err(Error::Response {
                status: 500,
                body: "internal server error".to_string(),
            });
        }

        let start = usize::try_from(page.offset).unwrap_or(usize::MAX).min(items.len());
        let end = start.saturating_add(page.limit as usize).min(items.len());
        Ok(items[start..end].to_vec())
    }
}

impl OrganizationApi for FakeOrganization {
    async fn projects_page(
        &self,
        organization: &OrganizationId,
        page: PageRequest,
    ) -> Result<Vec<Project>> {
        self.serve(
            organization,
            &self.projects,
            &self.project_requests,
            self.fail_projects_at,
            page,
        )
    }

    async fn styleguides_page(
        &self,
        organization: &OrganizationId,
        page: PageRequest,
    ) -> Result<Vec<Styleguide>> {
        self.serve(
            organization,
            &self.styleguides,
            &self.styleguide_requests,
            self.fail_styleguides_at,
            page,
        )
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
