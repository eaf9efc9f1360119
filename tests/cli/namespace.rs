//! Tests for set-namespace.

use crate::support::*;

const NAMESPACE_RESPONSE: &str = r#"{
  "id": "/subscriptions/x/resourceGroups/rg1/providers/Microsoft.EventHub/namespaces/ns1",
  "name": "ns1",
  "location": "westeurope",
  "sku": { "name": "Standard", "tier": "Standard", "capacity": 2 },
  "tags": { "env": "prod", "owner": "" }
}"#;

#[test]
fn test_set_namespace_sku_and_tags() {
    let t = Test::new();
    t.server.respond(namespace_path(), 200, NAMESPACE_RESPONSE);

    let output = t.on_namespace(
        "set-namespace",
        &[
            "--sku",
            "standard",
            "--capacity",
            "2",
            "--tags",
            r#"{"env":"prod","owner":null}"#,
        ],
    );
    assert_success(&output);

    let requests = t.server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({
            "sku": { "name": "Standard", "tier": "Standard", "capacity": 2 },
            "tags": { "env": "prod", "owner": "" }
        })
    );

    let view = stdout_json(&output);
    assert_eq!(view["name"], "ns1");
    assert_eq!(view["tags"]["env"], "prod");
    assert_eq!(view["sku"]["capacity"], 2);
}

#[test]
fn test_set_namespace_rejects_non_string_tag() {
    let t = Test::new();

    let output = t.on_namespace("set-namespace", &["--tags", r#"{"count":3}"#]);
    assert_failure(&output);
    assert_stderr_contains(&output, "count");
    assert_eq!(t.server.request_count(), 0);
}

#[test]
fn test_set_namespace_rejects_malformed_tags() {
    let t = Test::new();

    let output = t.on_namespace("set-namespace", &["--tags", "env=prod"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "JSON object");
    assert_eq!(t.server.request_count(), 0);
}

#[test]
fn test_set_namespace_capacity_requires_sku() {
    let t = Test::new();

    let output = t.on_namespace("set-namespace", &["--capacity", "2"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "--sku");
}

#[test]
fn test_set_namespace_with_nothing_to_update() {
    let t = Test::new();

    let output = t.on_namespace("set-namespace", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to update");
    assert_eq!(t.server.request_count(), 0);
}

#[test]
fn test_set_namespace_accepted_without_body() {
    let t = Test::new();
    t.server.respond(namespace_path(), 202, "");

    let output = t.on_namespace("set-namespace", &["--sku", "Basic"]);
    assert_success(&output);
    assert_eq!(t.server.request_count(), 1);

    let view = stdout_json(&output);
    assert_eq!(view["name"], "ns1");
}
