//! Tests for execution context resolution from the environment and files.

use crate::support::*;

fn regenerate_args() -> Vec<&'static str> {
    vec![
        "regenerate-namespace-keys",
        "--resource-group",
        RESOURCE_GROUP,
        "--namespace-name",
        NAMESPACE,
        "--authorization-rule",
        RULE,
        "--regenerate-keys",
        "PrimaryKey",
    ]
}

fn keys_path() -> String {
    child_path(&format!("authorizationRules/{}/regenerateKeys", RULE))
}

#[test]
fn test_missing_context_shows_hint() {
    let t = Test::new();

    let output = t.bare_cmd().args(regenerate_args()).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "subscription_id");
    assert_stderr_contains(&output, "HUBKEYS_SUBSCRIPTION_ID");
    assert_eq!(t.server.request_count(), 0);
}

#[test]
fn test_context_file_in_home() {
    let t = Test::new();
    t.server.respond(keys_path(), 200, KEYS_RESPONSE);
    t.write_context(&format!(
        "[context]\nsubscription_id = \"{}\"\naccess_token = \"{}\"\nendpoint = \"{}\"\n",
        SUBSCRIPTION_ID,
        ACCESS_TOKEN,
        t.server.url()
    ));

    let output = t.bare_cmd().args(regenerate_args()).output().unwrap();
    assert_success(&output);
    assert_eq!(t.server.request_count(), 1);
}

#[test]
fn test_explicit_context_flag() {
    let t = Test::new();
    t.server.respond(keys_path(), 200, KEYS_RESPONSE);
    let file = t.write_file(
        "ctx.toml",
        &format!(
            "[context]\nsubscription_id = \"{}\"\naccess_token = \"{}\"\nendpoint = \"{}\"\napi_version = \"2021-11-01\"\n",
            SUBSCRIPTION_ID,
            ACCESS_TOKEN,
            t.server.url()
        ),
    );

    let output = t
        .bare_cmd()
        .args(["--context", &file])
        .args(regenerate_args())
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.server.requests()[0]
        .query
        .contains("api-version=2021-11-01"));
}

#[test]
fn test_explicit_context_must_exist() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--context", "missing.toml"])
        .args(regenerate_args())
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "context file");
}

#[test]
fn test_environment_overrides_context_file() {
    let t = Test::new();
    t.server.respond(keys_path(), 200, KEYS_RESPONSE);
    t.write_context(
        "[context]\nsubscription_id = \"other-subscription\"\naccess_token = \"file-token\"\nendpoint = \"http://127.0.0.1:9\"\n",
    );

    let output = t.cmd().args(regenerate_args()).output().unwrap();
    assert_success(&output);
    assert_eq!(
        t.server.requests()[0].header("authorization"),
        Some(format!("Bearer {}", ACCESS_TOKEN).as_str())
    );
}

#[test]
fn test_invalid_endpoint_scheme() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("HUBKEYS_ENDPOINT", "ftp://example.com")
        .args(regenerate_args())
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "endpoint");
}

#[test]
fn test_invalid_selector_reported_without_context() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .args([
            "regenerate-namespace-keys",
            "--resource-group",
            RESOURCE_GROUP,
            "--namespace-name",
            NAMESPACE,
            "--authorization-rule",
            RULE,
            "--regenerate-keys",
            "TertiaryKey",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "--regenerate-keys");
    assert_stderr_excludes(&output, "subscription_id");
}

#[test]
fn test_blank_resource_group_reported_without_context() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .args([
            "regenerate-namespace-keys",
            "--resource-group",
            "",
            "--namespace-name",
            NAMESPACE,
            "--authorization-rule",
            RULE,
            "--regenerate-keys",
            "PrimaryKey",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--resource-group");
    assert_stderr_excludes(&output, "subscription_id");
}
