//! Tests for batch group kinds - CronJob and Job rendering

use std::sync::Arc;

use k8s_openapi::api::batch::v1::{CronJob, Job};
use kubetab::resources::{Adapter, Columnar, NamespaceScope, Tabular};

#[allow(dead_code)]
mod common {
    include!("../common/mod.rs");
}

// ============================================================================
// CronJob rendering tests
// ============================================================================

#[test]
fn test_cron_job_columns() {
    assert_eq!(
        CronJob::columns(),
        &["NAME", "SCHEDULE", "SUSPEND", "ACTIVE", "LAST_SCHEDULE", "AGE"]
    );
}

#[test]
fn test_cron_job_values_without_runs() {
    let cj = common::create_mock_cron_job("hourly", "batch", "* * * * *", true);
    let values = cj.values();

    assert_eq!(values[0], "hourly");
    assert_eq!(values[1], "* * * * *");
    assert_eq!(values[2], "true");
    assert_eq!(values[3], "0");
    assert_eq!(values[4], "<none>");
    assert_eq!(values[5], "2h");
}

#[test]
fn test_cron_job_fields_in_named_scope() {
    let cj = common::create_mock_cron_job("hourly", "batch", "* * * * *", true);
    let adapter =
        Adapter::new(Arc::new(common::MockCaller::<CronJob>::empty())).new_instance(cj);

    let fields = adapter.fields(&NamespaceScope::named("batch"));
    assert_eq!(fields[..5], ["hourly", "* * * * *", "true", "0", "<none>"]);
}

#[test]
fn test_cron_job_fields_in_all_scope_prepend_namespace() {
    let cj = common::create_mock_cron_job("hourly", "batch", "* * * * *", true);
    let adapter =
        Adapter::new(Arc::new(common::MockCaller::<CronJob>::empty())).new_instance(cj);

    let fields = adapter.fields(&NamespaceScope::All);
    assert_eq!(
        fields[..6],
        ["batch", "hourly", "* * * * *", "true", "0", "<none>"]
    );
}

#[test]
fn test_cron_job_active_counts_references() {
    let cj = common::create_mock_cron_job("hourly", "batch", "0 * * * *", false);
    let cj = common::with_runs(cj, 2, 1);
    let values = cj.values();

    assert_eq!(values[2], "false");
    assert_eq!(values[3], "2");
    assert_eq!(values[4], "1h");
}

#[test]
fn test_cron_job_ext_fields() {
    let cj = common::create_mock_cron_job("hourly", "batch", "0 * * * *", false);
    let props = cj.ext_fields();

    assert_eq!(props.get("containers").map(String::as_str), Some("main"));
    assert_eq!(
        props.get("images").map(String::as_str),
        Some("busybox:1.36")
    );
    assert_eq!(props.get("selector").map(String::as_str), Some("<none>"));
}

#[test]
fn test_cron_job_values_with_empty_spec() {
    let cj = CronJob {
        metadata: k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta {
            name: Some("bare".to_string()),
            namespace: Some("batch".to_string()),
            ..Default::default()
        },
        spec: None,
        status: None,
    };

    let values = cj.values();
    assert_eq!(values[1], "");
    assert_eq!(values[2], "false");
    assert_eq!(values[3], "0");
    assert_eq!(values[4], "<none>");
    assert_eq!(values[5], "<unknown>");
}

// ============================================================================
// Job rendering tests
// ============================================================================

#[test]
fn test_job_columns() {
    assert_eq!(Job::columns(), &["NAME", "COMPLETIONS", "DURATION", "AGE"]);
}

#[test]
fn test_job_values_completed() {
    let job = common::create_mock_job("backup", "batch", 5);
    let values = job.values();

    assert_eq!(values[0], "backup");
    assert_eq!(values[1], "1/1");
    assert_eq!(values[2], "5m");
    assert_eq!(values[3], "1h");
}

#[test]
fn test_job_duration_without_start_is_placeholder() {
    let mut job = common::create_mock_job("backup", "batch", 5);
    job.status = None;

    let values = job.values();
    assert_eq!(values[1], "0/1");
    assert_eq!(values[2], "<none>");
}

#[test]
fn test_job_header_and_values_align() {
    let job = common::create_mock_job("backup", "batch", 5);
    assert_eq!(Job::columns().len(), job.values().len());
}
