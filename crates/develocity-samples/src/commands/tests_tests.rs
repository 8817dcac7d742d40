//! Smoke tests for the unstable-container detection flow, run against a
//! wiremock server.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use develocity_api::{ApiClientConfig, DevelocityApi};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::commands::tests::collect_unstable_containers;
use crate::test_helpers::TestUserInterface;

fn now() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2023, 11, 24, 14, 19, 51)
        .unwrap()
        .fixed_offset()
}

const BETWEEN_LAST_WEEK: &str =
    "buildStartTime:[2023-11-16T14:19:51Z to 2023-11-23T14:19:51Z]";
const SINCE_YESTERDAY: &str = "buildStartTime>=2023-11-23T14:19:51Z";

fn client_for(server: &MockServer) -> DevelocityApi {
    DevelocityApi::new(ApiClientConfig::new(server.uri()).with_access_key("some-access-key"))
        .unwrap()
}

fn container_json(name: &str, failed: u64, flaky: u64, total: u64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "outcomeDistribution": { "total": total, "failed": failed, "flaky": flaky }
    })
}

fn container_with_details_json(
    name: &str,
    failed: u64,
    flaky: u64,
    total: u64,
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "outcomeDistribution": { "total": total, "failed": failed, "flaky": flaky },
        "workUnits": [ { "gradle": { "projectName": "project", "taskPath": ":test" } } ],
        "buildScanIdsByOutcome": { "failed": ["123"], "flaky": ["456"] }
    })
}

#[tokio::test]
async fn pairs_newly_unstable_containers_with_their_unstable_cases() {
    let server = MockServer::start().await;

    // containers that were already unstable during the preceding week
    Mock::given(method("GET"))
        .and(path("/api/tests/containers"))
        .and(query_param("query", BETWEEN_LAST_WEEK))
        .and(query_param("testOutcomes", "failed"))
        .and(query_param("testOutcomes", "flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [ container_json("org.example.AnotherTestContainer", 1, 0, 1) ]
        })))
        .mount(&server)
        .await;

    // containers unstable since yesterday, scan IDs and work units included
    Mock::given(method("GET"))
        .and(path("/api/tests/containers"))
        .and(query_param("query", SINCE_YESTERDAY))
        .and(query_param("include", "buildScanIds"))
        .and(query_param("include", "workUnits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [
                container_with_details_json("org.example.AnotherTestContainer", 1, 0, 1),
                container_with_details_json("org.example.AaaContainer", 1, 0, 2),
                container_with_details_json("org.example.ZzzContainer", 1, 2, 5)
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tests/cases"))
        .and(query_param("container", "org.example.ZzzContainer"))
        .and(query_param("query", SINCE_YESTERDAY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [ container_json("someTest", 2, 4, 10) ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tests/cases"))
        .and(query_param("container", "org.example.AaaContainer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": []
        })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let ui = TestUserInterface::new();

    let containers = collect_unstable_containers(&api, None, now(), &ui)
        .await
        .unwrap();

    // the container that was already unstable last week is filtered out, the
    // remaining two are ordered by unstable ratio
    assert_eq!(containers.len(), 2);
    assert_eq!(containers[0].container.name, "org.example.ZzzContainer");
    assert_eq!(containers[1].container.name, "org.example.AaaContainer");

    assert_eq!(containers[0].cases.len(), 1);
    assert_eq!(containers[0].cases[0].name, "someTest");
    assert_eq!(containers[0].cases[0].outcome_distribution.flaky, 4);
    assert!(containers[1].cases.is_empty());

    assert_eq!(
        ui.printed_lines(),
        vec![
            "Found 1 unstable test containers between 2023-11-16T14:19:51Z and 2023-11-23T14:19:51Z.",
            "Found 2 test classes that became unstable since 2023-11-23T14:19:51Z.",
            "Determining unstable test cases in the newly unstable test containers...",
        ]
    );
}

#[tokio::test]
async fn scopes_all_queries_to_the_project_when_one_is_given() {
    let server = MockServer::start().await;

    let scoped_between = format!("{BETWEEN_LAST_WEEK} and project:myProject");
    let scoped_since = format!("{SINCE_YESTERDAY} and project:myProject");

    Mock::given(method("GET"))
        .and(path("/api/tests/containers"))
        .and(query_param("query", scoped_between.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tests/containers"))
        .and(query_param("query", scoped_since.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [ container_with_details_json("org.example.TestContainer", 1, 2, 5) ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tests/cases"))
        .and(query_param("container", "org.example.TestContainer"))
        .and(query_param("query", scoped_since.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [ container_json("someTest", 2, 4, 10) ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let ui = TestUserInterface::new();

    let containers = collect_unstable_containers(&api, Some("myProject"), now(), &ui)
        .await
        .unwrap();

    assert_eq!(containers.len(), 1);
    assert_eq!(containers[0].container.name, "org.example.TestContainer");
    assert_eq!(containers[0].cases.len(), 1);
}

#[tokio::test]
async fn a_failing_query_surfaces_as_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tests/containers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("something broke"))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let ui = TestUserInterface::new();

    let error = collect_unstable_containers(&api, None, now(), &ui)
        .await
        .unwrap_err();

    assert_eq!(error.status().map(|status| status.as_u16()), Some(500));
}
