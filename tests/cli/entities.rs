//! Tests for authorization rule, event hub and consumer group creation.

use crate::support::*;

const RULE_RESPONSE: &str = r#"{
  "id": "/subscriptions/x/resourceGroups/rg1/providers/Microsoft.EventHub/namespaces/ns1/authorizationRules/sender",
  "name": "sender",
  "properties": { "rights": ["Send"] }
}"#;

#[test]
fn test_new_rule_inline() {
    let t = Test::new();
    let path = child_path("authorizationRules/sender");
    t.server.respond(path.as_str(), 200, RULE_RESPONSE);

    let output = t.on_namespace(
        "new-namespace-authorization-rule",
        &["--name", "sender", "--rights", "send"],
    );
    assert_success(&output);

    let rule = stdout_json(&output);
    assert_eq!(rule["name"], "sender");
    assert_eq!(rule["rights"], serde_json::json!(["Send"]));

    let requests = t.server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({ "properties": { "rights": ["Send"] } })
    );
}

#[test]
fn test_new_rule_manage_without_listen_is_rejected() {
    let t = Test::new();

    let output = t.on_namespace(
        "new-namespace-authorization-rule",
        &["--name", "admin", "--rights", "Manage"],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "Manage");
    assert_eq!(t.server.request_count(), 0);
}

#[test]
fn test_new_rule_from_input_file() {
    let t = Test::new();
    t.server
        .respond(child_path("authorizationRules/sender"), 200, RULE_RESPONSE);
    let file = t.write_file("rule.json", r#"{ "name": "sender", "rights": ["Send"] }"#);

    let output = t.on_namespace("new-namespace-authorization-rule", &["--input-file", &file]);
    assert_success(&output);
    assert_eq!(t.server.requests()[0].path, child_path("authorizationRules/sender"));
}

#[test]
fn test_new_rule_missing_input_file() {
    let t = Test::new();

    let output = t.on_namespace(
        "new-namespace-authorization-rule",
        &["--input-file", "absent.json"],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "does not exist");
    assert_eq!(t.server.request_count(), 0);
}

#[test]
fn test_new_rule_malformed_input_file() {
    let t = Test::new();
    let file = t.write_file("rule.json", "{ not json");

    let output = t.on_namespace("new-namespace-authorization-rule", &["--input-file", &file]);
    assert_failure(&output);
    assert_eq!(t.server.request_count(), 0);
}

#[test]
fn test_new_event_hub_inline() {
    let t = Test::new();
    t.server.respond(
        child_path("eventhubs/telemetry"),
        200,
        r#"{
          "name": "telemetry",
          "properties": {
            "partitionCount": 4,
            "messageRetentionInDays": 3,
            "status": "Active",
            "partitionIds": ["0", "1", "2", "3"]
          }
        }"#,
    );

    let output = t.on_namespace(
        "new-event-hub",
        &[
            "--name",
            "telemetry",
            "--partition-count",
            "4",
            "--message-retention-in-days",
            "3",
        ],
    );
    assert_success(&output);

    let hub = stdout_json(&output);
    assert_eq!(hub["partitionCount"], 4);
    assert_eq!(hub["status"], "Active");
    assert_eq!(
        t.server.requests()[0].json(),
        serde_json::json!({ "properties": { "messageRetentionInDays": 3, "partitionCount": 4 } })
    );
}

#[test]
fn test_new_event_hub_partition_count_out_of_range() {
    let t = Test::new();

    let output = t.on_namespace(
        "new-event-hub",
        &["--name", "telemetry", "--partition-count", "64"],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "--partition-count");
    assert_eq!(t.server.request_count(), 0);
}

#[test]
fn test_new_consumer_group() {
    let t = Test::new();
    t.server.respond(
        child_path("eventhubs/telemetry/consumergroups/analytics"),
        200,
        r#"{ "name": "analytics", "properties": { "userMetadata": "team-a" } }"#,
    );

    let output = t.on_namespace(
        "new-consumer-group",
        &[
            "--event-hub",
            "telemetry",
            "--name",
            "analytics",
            "--user-metadata",
            "team-a",
        ],
    );
    assert_success(&output);

    let group = stdout_json(&output);
    assert_eq!(group["name"], "analytics");
    assert_eq!(group["eventHubName"], "telemetry");
    assert_eq!(group["userMetadata"], "team-a");
}

#[test]
fn test_new_consumer_group_rejects_default_group() {
    let t = Test::new();

    let output = t.on_namespace(
        "new-consumer-group",
        &["--event-hub", "telemetry", "--name", "$default"],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "reserved");
    assert_eq!(t.server.request_count(), 0);
}
