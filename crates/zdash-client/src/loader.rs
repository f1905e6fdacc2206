use zdash_engine::{Dashboard, Session, TransitionError};
use zdash_types::OrganizationId;

use crate::api::{OrganizationApi, fetch_projects, fetch_styleguides};
use crate::Result;
use crate::pagination::Pagination;

/// Fetch both collections and wrap them in a [`Dashboard`].
///
/// The two listings are polled concurrently on the current task; pages
/// within each listing stay sequential. The first failure wins and nothing
/// partial is returned.
pub async fn load_dashboard<A: OrganizationApi>(
    api: &A,
    organization: &OrganizationId,
    pagination: Pagination,
) -> Result<Dashboard> {
    tracing::debug!(%organization, page_size = pagination.page_size(), "loading dashboard");

    let (projects, styleguides) = futures::try_join!(
        fetch_projects(api, organization, pagination),
        fetch_styleguides(api, organization, pagination)
    )?;

    Ok(Dashboard::new(projects.items, styleguides.items))
}

/// Drive a loading session to `Ready` or `Failed`.
///
/// Fetch failures end up in the session state; the returned error is only
/// for sessions that were not loading to begin with.
pub async fn load_session<A: OrganizationApi>(
    session: &mut Session,
    api: &A,
    organization: &OrganizationId,
    pagination: Pagination,
) -> Result<()> {
    if !session.is_loading() {
        return Err(TransitionError {
            from: session.state().name(),
        }
        .into());
    }

    let outcome = load_dashboard(api, organization, pagination).await;
    session.resolve(outcome)?;
    Ok(())
}
