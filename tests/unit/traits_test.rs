//! Tests for src/resources/traits.rs - durations, paths, scopes, kind consts

use chrono::{Duration as ChronoDuration, Utc};
use k8s_openapi::api::batch::v1::CronJob;
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kubetab::error::Error;
use kubetab::resources::{
    format_duration, humanize_duration, join_path, split_path, KubeKind, NamespaceScope,
};

#[allow(dead_code)]
mod common {
    include!("../common/mod.rs");
}

// ============================================================================
// duration formatting tests
// ============================================================================

#[test]
fn test_humanize_duration_seconds() {
    let time = Utc::now() - ChronoDuration::seconds(30);
    assert_eq!(humanize_duration(time), "30s");
}

#[test]
fn test_humanize_duration_minutes() {
    let time = Utc::now() - ChronoDuration::minutes(5);
    assert_eq!(humanize_duration(time), "5m");
}

#[test]
fn test_humanize_duration_hours() {
    let time = Utc::now() - ChronoDuration::hours(3);
    assert_eq!(humanize_duration(time), "3h");
}

#[test]
fn test_humanize_duration_days() {
    let time = Utc::now() - ChronoDuration::days(7);
    assert_eq!(humanize_duration(time), "7d");
}

#[test]
fn test_humanize_duration_mixed_time_shows_largest_unit() {
    let time = Utc::now() - ChronoDuration::days(2) - ChronoDuration::hours(5);
    assert_eq!(humanize_duration(time), "2d");
}

#[test]
fn test_humanize_duration_future_time_returns_zero() {
    let time = Utc::now() + ChronoDuration::hours(1);
    assert_eq!(humanize_duration(time), "0s");
}

#[test]
fn test_format_duration_span() {
    assert_eq!(format_duration(ChronoDuration::minutes(90)), "1h");
    assert_eq!(format_duration(ChronoDuration::seconds(45)), "45s");
    assert_eq!(format_duration(ChronoDuration::days(3)), "3d");
}

// ============================================================================
// identity path tests
// ============================================================================

#[test]
fn test_split_path_namespaced() {
    let (ns, name) = split_path("batch/hourly").unwrap();
    assert_eq!(ns, "batch");
    assert_eq!(name, "hourly");
}

#[test]
fn test_split_path_cluster_scoped() {
    let (ns, name) = split_path("kube-system").unwrap();
    assert_eq!(ns, "");
    assert_eq!(name, "kube-system");
}

#[test]
fn test_split_path_empty_is_invalid() {
    assert!(matches!(split_path(""), Err(Error::InvalidPath(_))));
}

#[test]
fn test_split_path_missing_name_is_invalid() {
    assert!(matches!(split_path("batch/"), Err(Error::InvalidPath(_))));
}

#[test]
fn test_join_path() {
    assert_eq!(join_path("batch", "hourly"), "batch/hourly");
}

#[test]
fn test_kind_path_namespaced() {
    let cj = common::create_mock_cron_job("hourly", "batch", "* * * * *", false);
    assert_eq!(cj.path(), "batch/hourly");
}

#[test]
fn test_kind_path_cluster_scoped() {
    let ns = common::create_mock_namespace("prod", "Active");
    assert_eq!(ns.path(), "prod");
}

// ============================================================================
// namespace scope tests
// ============================================================================

#[test]
fn test_scope_all() {
    let scope = NamespaceScope::All;
    assert!(scope.is_all());
    assert_eq!(scope.name(), None);
}

#[test]
fn test_scope_named() {
    let scope = NamespaceScope::named("batch");
    assert!(!scope.is_all());
    assert_eq!(scope.name(), Some("batch"));
}

// ============================================================================
// kind const tests
// ============================================================================

#[test]
fn test_cron_job_consts() {
    assert_eq!(CronJob::KIND, "CronJob");
    assert_eq!(CronJob::GROUP, "batch");
    assert_eq!(CronJob::VERSION, "v1");
    assert_eq!(CronJob::PLURAL, "cronjobs");
    assert!(CronJob::ALIASES.contains(&"cj"));
    assert!(CronJob::NAMESPACED);
}

#[test]
fn test_api_version_with_group() {
    assert_eq!(CronJob::api_version(), "batch/v1");
}

#[test]
fn test_api_version_core_group() {
    assert_eq!(Pod::api_version(), "v1");
}

#[test]
fn test_namespace_is_cluster_scoped() {
    assert!(!Namespace::NAMESPACED);
}

#[test]
fn test_name_defaults_when_unset() {
    let pod = k8s_openapi::api::core::v1::Pod::default();
    assert_eq!(pod.name(), "<unknown>");
    assert_eq!(pod.namespace(), None);
}

#[test]
fn test_age_defaults_when_unset() {
    let pod = k8s_openapi::api::core::v1::Pod::default();
    assert_eq!(pod.age(), "<unknown>");
}
