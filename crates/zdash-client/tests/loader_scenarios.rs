//! End-to-end loading scenarios against an in-memory organization.

use zdash_client::{Error, PageRequest, Pagination, load_dashboard, load_session};
use zdash_engine::{Session, SessionState};
use zdash_testing::{FakeOrganization, numbered_projects, project, styleguide};
use zdash_types::OrganizationId;

fn offsets(requests: &[PageRequest]) -> Vec<u64> {
    requests.iter().map(|r| r.offset).collect()
}

#[tokio::test]
async fn test_150_projects_take_two_requests() {
    let fake = FakeOrganization::new("org")
        .with_projects(numbered_projects("web", 120, "web", true))
        .with_projects(numbered_projects("ios", 30, "ios", true));

    let dashboard = load_dashboard(&fake, fake.id(), Pagination::default())
        .await
        .unwrap();

    assert_eq!(dashboard.projects().len(), 150);
    assert_eq!(offsets(&fake.project_requests()), vec![0, 100]);
    assert!(fake.project_requests().iter().all(|r| r.limit == 100));
    assert_eq!(dashboard.platform_counts().get("web"), Some(120));
    assert_eq!(dashboard.platform_counts().get("ios"), Some(30));
}

#[tokio::test]
async fn test_exact_page_costs_one_extra_request() {
    let fake = FakeOrganization::new("org").with_projects(numbered_projects("p", 100, "web", true));

    let dashboard = load_dashboard(&fake, fake.id(), Pagination::default())
        .await
        .unwrap();

    assert_eq!(dashboard.projects().len(), 100);
    assert_eq!(offsets(&fake.project_requests()), vec![0, 100]);
}

#[tokio::test]
async fn test_empty_organization_takes_one_request_each() {
    let fake = FakeOrganization::new("org");

    let dashboard = load_dashboard(&fake, fake.id(), Pagination::default())
        .await
        .unwrap();

    assert!(dashboard.projects().is_empty());
    assert!(dashboard.styleguides().is_empty());
    assert!(dashboard.rows().is_empty());
    assert_eq!(fake.project_requests().len(), 1);
    assert_eq!(fake.styleguide_requests().len(), 1);
}

#[tokio::test]
async fn test_small_page_size_keeps_arrival_order() {
    let fake = FakeOrganization::new("org").with_projects(numbered_projects("p", 7, "web", true));
    let pagination = Pagination::new(3).unwrap();

    let dashboard = load_dashboard(&fake, fake.id(), pagination).await.unwrap();

    let ids: Vec<&str> = dashboard.projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["p-0000", "p-0001", "p-0002", "p-0003", "p-0004", "p-0005", "p-0006"]
    );
    assert_eq!(offsets(&fake.project_requests()), vec![0, 3, 6]);
}

#[tokio::test]
async fn test_rows_resolve_active_styleguides_only() {
    let fake = FakeOrganization::new("org")
        .with_projects([
            project("p1").name("Alpha").linked_to("sg1").build(),
            project("p2").name("Beta").linked_to("sg2").build(),
            project("p3").name("Gamma").build(),
            project("p4").name("Archived").archived().linked_to("sg2").build(),
        ])
        .with_styleguides([
            styleguide("sg1", "Old Kit").archived().build(),
            styleguide("sg2", "Core Kit").build(),
        ]);

    let dashboard = load_dashboard(&fake, fake.id(), Pagination::default())
        .await
        .unwrap();

    let rows = dashboard.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].styleguide_name, None);
    assert!(rows[0].is_unresolved_link());
    assert_eq!(rows[1].styleguide_name.as_deref(), Some("Core Kit"));
    assert!(!rows[2].has_link());

    let partition = dashboard.link_partition();
    assert_eq!((partition.linked, partition.unlinked), (2, 1));
    assert_eq!(dashboard.summary().unresolved_links, 1);
}

#[tokio::test]
async fn test_project_failure_fails_whole_load() {
    let fake = FakeOrganization::new("org")
        .with_projects(numbered_projects("p", 150, "web", true))
        .fail_projects_at_page(1);

    let err = load_dashboard(&fake, fake.id(), Pagination::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Response { status: 500, .. }));
    assert_eq!(fake.project_requests().len(), 2);
}

#[tokio::test]
async fn test_styleguide_failure_moves_session_to_failed() {
    let fake = FakeOrganization::new("org")
        .with_projects(numbered_projects("p", 3, "web", true))
        .fail_styleguides_at_page(0);
    let mut session = Session::new();

    load_session(&mut session, &fake, fake.id(), Pagination::default())
        .await
        .unwrap();

    assert!(session.dashboard().is_none());
    let failure = session.failure().unwrap();
    assert!(failure.message.contains("HTTP 500"));
}

#[tokio::test]
async fn test_wrong_workspace_fails_session() {
    let fake = FakeOrganization::new("org");
    let mut session = Session::new();

    let elsewhere = OrganizationId::from("elsewhere");
    load_session(&mut session, &fake, &elsewhere, Pagination::default())
        .await
        .unwrap();

    assert_eq!(session.state().name(), "failed");
}

#[tokio::test]
async fn test_settled_session_refuses_second_load() {
    let fake = FakeOrganization::new("org").with_projects(numbered_projects("p", 2, "web", true));
    let mut session = Session::new();

    load_session(&mut session, &fake, fake.id(), Pagination::default())
        .await
        .unwrap();
    let err = load_session(&mut session, &fake, fake.id(), Pagination::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transition(_)));
    assert_eq!(fake.project_requests().len(), 1);
}

#[tokio::test]
async fn test_reload_after_failure_reaches_ready() {
    let failing = FakeOrganization::new("org").fail_projects_at_page(0);
    let mut session = Session::new();
    load_session(&mut session, &failing, failing.id(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(session.state().name(), "failed");

    let healthy = FakeOrganization::new("org").with_projects(numbered_projects("p", 4, "web", true));
    let mut session = session.reload();
    assert!(session.is_loading());

    load_session(&mut session, &healthy, healthy.id(), Pagination::default())
        .await
        .unwrap();

    match session.into_state() {
        SessionState::Ready(dashboard) => assert_eq!(dashboard.rows().len(), 4),
        other => panic!("expected ready, got {}", other.name()),
    }
}
