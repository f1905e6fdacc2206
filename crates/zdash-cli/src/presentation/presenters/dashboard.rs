use serde::Serialize;
use zdash_engine::{Dashboard, DisplayRow, LinkPartition, PlatformCounts, Session, SessionState};

use crate::presentation::view_models::{
    ChartSliceViewModel, ChartViewModel, CommandResultViewModel, DashboardViewModel, Guidance,
    ProjectRowViewModel, ProjectTableViewModel, SessionViewModel, StatusBadge, SummaryViewModel,
};

pub const PROJECT_TYPES_TITLE: &str = "Project Types";
pub const LINKED_STYLEGUIDES_TITLE: &str = "Projects with Linked Styleguides";
pub const HAS_LINK_LABEL: &str = "Has Linked Styleguide";
pub const NO_LINK_LABEL: &str = "No Linked Styleguide";

pub fn present_dashboard(
    session: &Session,
) -> CommandResultViewModel<SessionViewModel<DashboardViewModel>> {
    present_session(session, |dashboard| DashboardViewModel {
        summary: summary(dashboard),
        project_types: project_types_chart(dashboard.platform_counts()),
        linked_styleguides: linked_styleguides_chart(dashboard.link_partition()),
        projects: project_table(dashboard.rows(), None),
    })
}

pub fn present_project_types(
    session: &Session,
) -> CommandResultViewModel<SessionViewModel<ChartViewModel>> {
    present_session(session, |dashboard| {
        project_types_chart(dashboard.platform_counts())
    })
}

pub fn present_linked_styleguides(
    session: &Session,
) -> CommandResultViewModel<SessionViewModel<ChartViewModel>> {
    present_session(session, |dashboard| {
        linked_styleguides_chart(dashboard.link_partition())
    })
}

pub fn present_projects(
    session: &Session,
    platform: Option<&str>,
) -> CommandResultViewModel<SessionViewModel<ProjectTableViewModel>> {
    present_session(session, |dashboard| project_table(dashboard.rows(), platform))
}

/// Screen model for the interactive dashboard; same content as
/// [`present_dashboard`] without the console decorations
pub fn present_screen(session: &Session) -> SessionViewModel<DashboardViewModel> {
    present_dashboard(session).content
}

/// Wrap the state of a session, building ready content with `build`.
///
/// A failed session gets an error badge carrying the failure message so no
/// output mode can mistake it for an empty workspace.
fn present_session<T, F>(
    session: &Session,
    build: F,
) -> CommandResultViewModel<SessionViewModel<T>>
where
    T: Serialize,
    F: FnOnce(&Dashboard) -> T,
{
    match session.state() {
        SessionState::Loading => CommandResultViewModel::new(SessionViewModel::Loading)
            .with_badge(StatusBadge::info("Loading dashboard...")),
        SessionState::Failed(failure) => CommandResultViewModel::new(SessionViewModel::Failed {
            error: failure.message.clone(),
        })
        .with_badge(StatusBadge::error(format!(
            "Failed to load dashboard: {}",
            failure.message
        )))
        .with_suggestion(
            Guidance::new("Check the access token and workspace id")
                .with_command("zdash config show"),
        ),
        SessionState::Ready(dashboard) => {
            let summary = dashboard.summary();
            let mut result = CommandResultViewModel::new(SessionViewModel::Ready(build(dashboard)))
                .with_badge(StatusBadge::success(format!(
                    "{} active project(s), {} active styleguide(s)",
                    summary.active_projects, summary.active_styleguides
                )));

            if summary.unresolved_links > 0 {
                result = result.with_suggestion(Guidance::new(format!(
                    "{} project(s) link a styleguide that is archived or not visible; shown as '-'",
                    summary.unresolved_links
                )));
            }

            result
        }
    }
}

fn summary(dashboard: &Dashboard) -> SummaryViewModel {
    let summary = dashboard.summary();
    SummaryViewModel {
        total_projects: summary.total_projects,
        active_projects: summary.active_projects,
        total_styleguides: summary.total_styleguides,
        active_styleguides: summary.active_styleguides,
        unresolved_links: summary.unresolved_links,
    }
}

/// Platform counts over every fetched project, in first-seen order
pub fn project_types_chart(counts: &PlatformCounts) -> ChartViewModel {
    chart(
        PROJECT_TYPES_TITLE,
        counts
            .iter()
            .map(|entry| (entry.platform.clone(), entry.count))
            .collect(),
    )
}

pub fn linked_styleguides_chart(partition: LinkPartition) -> ChartViewModel {
    chart(
        LINKED_STYLEGUIDES_TITLE,
        vec![
            (HAS_LINK_LABEL.to_string(), partition.linked),
            (NO_LINK_LABEL.to_string(), partition.unlinked),
        ],
    )
}

fn chart(title: &str, entries: Vec<(String, usize)>) -> ChartViewModel {
    let total: usize = entries.iter().map(|(_, count)| count).sum();
    let slices = entries
        .into_iter()
        .map(|(label, count)| ChartSliceViewModel {
            percent: percent_of(count, total),
            label,
            count,
        })
        .collect();

    ChartViewModel {
        title: title.to_string(),
        total,
        slices,
    }
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

pub fn project_table(rows: &[DisplayRow], platform: Option<&str>) -> ProjectTableViewModel {
    let rows = rows
        .iter()
        .filter(|row| platform.is_none_or(|p| row.platform.eq_ignore_ascii_case(p)))
        .map(project_row)
        .collect();

    ProjectTableViewModel {
        platform_filter: platform.map(str::to_string),
        rows,
    }
}

fn project_row(row: &DisplayRow) -> ProjectRowViewModel {
    ProjectRowViewModel {
        id: row.project_id.to_string(),
        name: row.name.clone(),
        platform: row.platform.clone(),
        workflow_status: row.workflow_status.clone(),
        number_of_members: row.member_count,
        number_of_screens: row.screen_count,
        linked_styleguide_id: row.linked_styleguide_id.as_ref().map(|id| id.to_string()),
        linked_styleguide_name: row.styleguide_name.clone(),
        linked_styleguide_url: row.styleguide_url.clone(),
        updated_at: row.updated_at,
    }
}
