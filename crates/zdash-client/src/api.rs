use std::future::Future;
use zdash_types::{OrganizationId, Project, Styleguide};

use crate::Result;
use crate::pagination::{Fetched, PageRequest, Pagination, fetch_all_pages};

/// Page-level access to an organization's listings.
///
/// Implemented by [`crate::ZeplinClient`] for the real API and by in-memory
/// fakes in tests.
pub trait OrganizationApi {
    fn projects_page(
        &self,
        organization: &OrganizationId,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Project>>> + Send;

    fn styleguides_page(
        &self,
        organization: &OrganizationId,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Styleguide>>> + Send;
}

/// Every project of the organization, active or not
pub async fn fetch_projects<A: OrganizationApi>(
    api: &A,
    organization: &OrganizationId,
    pagination: Pagination,
) -> Result<Fetched<Project>> {
    fetch_all_pages("projects", pagination, |page| {
        api.projects_page(organization, page)
    })
    .await
}

/// Every styleguide of the organization, active or not
pub async fn fetch_styleguides<A: OrganizationApi>(
    api: &A,
    organization: &OrganizationId,
    pagination: Pagination,
) -> Result<Fetched<Styleguide>> {
    fetch_all_pages("styleguides", pagination, |page| {
        api.styleguides_page(organization, page)
    })
    .await
}
