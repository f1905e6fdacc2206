//! `zdash config` and configuration failures, run against the real binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use zdash_client::ConfigFile;
use zdash_testing::TestWorld;

#[test]
fn test_missing_token_exits_with_config_status() {
    let world = TestWorld::new().with_env("ZEPLIN_WORKSPACE_ID", "ws-1");

    world
        .run(&["dashboard"])
        .unwrap()
        .code(2)
        .stderr(predicate::str::contains("Missing access token"))
        .stderr(predicate::str::contains("ZEPLIN_ACCESS_TOKEN"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_workspace_exits_with_config_status() {
    let world = TestWorld::new().with_env("ZEPLIN_ACCESS_TOKEN", "secret-token-1234");

    world
        .run(&["types", "--format", "json"])
        .unwrap()
        .code(2)
        .stderr(predicate::str::contains("Missing workspace id"));
}

#[test]
fn test_malformed_config_file_exits_with_config_status() {
    let world = TestWorld::new();
    std::fs::create_dir_all(world.config_path().parent().unwrap()).unwrap();
    std::fs::write(world.config_path(), "access_token = [not toml").unwrap();

    world
        .run(&["config", "show"])
        .unwrap()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_init_then_refuses_to_overwrite() {
    let world = TestWorld::new();

    world
        .run(&["config", "init"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Config file created"));
    assert!(world.config_path().exists());

    let written = ConfigFile::load_from(world.config_path()).unwrap();
    assert_eq!(written, ConfigFile::template());

    world
        .run(&["config", "init"])
        .unwrap()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    world
        .run(&["config", "init", "--force"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Config file overwritten"));
}

#[test]
fn test_fresh_config_init_still_fails_fast_on_dashboard() {
    let world = TestWorld::new();

    world
        .run(&["config", "init"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Add access_token and workspace_id"));

    world
        .run(&["dashboard"])
        .unwrap()
        .code(2)
        .stderr(predicate::str::contains("Missing access token"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_init_saves_environment_settings() {
    let world = TestWorld::new().configured();

    world
        .run(&["config", "init"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Token and workspace id saved"));

    let written = ConfigFile::load_from(world.config_path()).unwrap();
    assert_eq!(written.access_token.as_deref(), Some("test-token-0000"));
    assert_eq!(written.workspace_id.as_deref(), Some("test-workspace"));

    TestWorld::new()
        .with_config_file(&written)
        .run(&["config", "show"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("test-workspace"));
}

#[test]
fn test_config_show_redacts_token() {
    let world = TestWorld::new().with_config_file(&ConfigFile {
        access_token: Some("zplpat-abcdefgh-wxyz".to_string()),
        workspace_id: Some("ws-from-file".to_string()),
        api_url: None,
        timeout_secs: Some(10),
    });

    world
        .run(&["config", "show"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("ws-from-file"))
        .stdout(predicate::str::contains("****wxyz"))
        .stdout(predicate::str::contains("10s"))
        .stdout(predicate::str::contains("abcdefgh").not());
}

#[test]
fn test_flags_override_environment() {
    let world = TestWorld::new().configured();

    let mut cmd = cargo_bin_cmd!("zdash");
    world
        .configure_command(&mut cmd)
        .args(["config", "show", "--format", "json", "--workspace", "ws-flag"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["content"]["workspace_id"], "ws-flag");
    assert_eq!(json["content"]["api_url"], "https://api.zeplin.dev/v1");
    assert_eq!(json["content"]["access_token"], "****0000");
}
