use predicates::prelude::*;
use zdash_testing::TestWorld;

#[test]
fn test_help_lists_commands() {
    let world = TestWorld::new();

    let mut assert = world.run(&["--help"]).unwrap().success();
    for command in ["dashboard", "projects", "types", "links", "tui", "config"] {
        assert = assert.stdout(predicate::str::contains(command));
    }
}

#[test]
fn test_projects_help_lists_filters() {
    let world = TestWorld::new();

    world
        .run(&["projects", "--help"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("--csv"))
        .stdout(predicate::str::contains("--platform"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let world = TestWorld::new();

    world
        .run(&["--format", "yaml", "types"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}
