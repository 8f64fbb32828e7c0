//! Tests for apps group kinds - Deployment and StatefulSet rendering

use k8s_openapi::api::apps::v1::{Deployment, StatefulSet, StatefulSetSpec, StatefulSetStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use kubetab::resources::Columnar;

#[allow(dead_code)]
mod common {
    include!("../common/mod.rs");
}

// ============================================================================
// Deployment tests
// ============================================================================

#[test]
fn test_deployment_columns() {
    assert_eq!(
        Deployment::columns(),
        &["NAME", "READY", "UP-TO-DATE", "AVAILABLE", "AGE"]
    );
}

#[test]
fn test_deployment_values() {
    let deploy = common::create_mock_deployment("api", "default", 3);
    let values = deploy.values();

    assert_eq!(values[0], "api");
    assert_eq!(values[1], "3/3");
    assert_eq!(values[2], "3");
    assert_eq!(values[3], "3");
    assert_eq!(values[4], "1d");
}

#[test]
fn test_deployment_without_status_shows_zeroes() {
    let mut deploy = common::create_mock_deployment("api", "default", 3);
    deploy.status = None;

    let values = deploy.values();
    assert_eq!(values[1], "0/3");
    assert_eq!(values[2], "0");
    assert_eq!(values[3], "0");
}

#[test]
fn test_deployment_ext_fields_without_pod_spec() {
    let deploy = common::create_mock_deployment("api", "default", 3);
    let props = deploy.ext_fields();

    assert_eq!(props.get("containers").map(String::as_str), Some("<none>"));
    assert_eq!(props.get("images").map(String::as_str), Some("<none>"));
}

#[test]
fn test_deployment_header_and_values_align() {
    let deploy = common::create_mock_deployment("api", "default", 2);
    assert_eq!(Deployment::columns().len(), deploy.values().len());
}

// ============================================================================
// StatefulSet tests
// ============================================================================

fn mock_stateful_set(name: &str, desired: i32, ready: i32) -> StatefulSet {
    StatefulSet {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("default".to_string()),
            ..Default::default()
        },
        spec: Some(StatefulSetSpec {
            replicas: Some(desired),
            selector: LabelSelector::default(),
            ..Default::default()
        }),
        status: Some(StatefulSetStatus {
            ready_replicas: Some(ready),
            ..Default::default()
        }),
    }
}

#[test]
fn test_stateful_set_columns() {
    assert_eq!(StatefulSet::columns(), &["NAME", "READY", "AGE"]);
}

#[test]
fn test_stateful_set_values() {
    let sts = mock_stateful_set("db", 3, 2);
    let values = sts.values();

    assert_eq!(values[0], "db");
    assert_eq!(values[1], "2/3");
}

#[test]
fn test_stateful_set_header_and_values_align() {
    let sts = mock_stateful_set("db", 1, 1);
    assert_eq!(StatefulSet::columns().len(), sts.values().len());
}
