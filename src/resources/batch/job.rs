//! Job resource implementation

use std::sync::Arc;

use chrono::Utc;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::KubeCaller;
use crate::resources::adapter::Adapter;
use crate::resources::list::List;
use crate::resources::traits::{format_duration, Columnar, KubeKind, NamespaceScope, Row};

impl KubeKind for Job {
    const KIND: &'static str = "Job";
    const GROUP: &'static str = "batch";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "jobs";
    const NAMESPACED: bool = true;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn api(client: Client, namespace: Option<&str>) -> Api<Self> {
        match namespace {
            Some(ns) => Api::namespaced(client, ns),
            None => Api::all(client),
        }
    }
}

impl Columnar for Job {
    fn columns() -> &'static [&'static str] {
        &["NAME", "COMPLETIONS", "DURATION", "AGE"]
    }

    fn values(&self) -> Row {
        let desired = self.spec.as_ref().and_then(|s| s.completions).unwrap_or(1);
        let succeeded = self.status.as_ref().and_then(|s| s.succeeded).unwrap_or(0);

        vec![
            self.name().to_string(),
            format!("{}/{}", succeeded, desired),
            duration(self),
            self.age(),
        ]
    }
}

/// New job list.
pub fn new_job_list(client: Client, scope: NamespaceScope) -> List<Job> {
    let template = Adapter::new(Arc::new(KubeCaller::<Job>::new(client)));
    List::new(scope, Job::PLURAL, template, Job::ACCESS)
}

/// Wall time from start to completion, or to now while still running.
fn duration(job: &Job) -> String {
    let status = job.status.as_ref();

    let Some(start) = status.and_then(|s| s.start_time.as_ref()) else {
        return "<none>".to_string();
    };

    let end = status
        .and_then(|s| s.completion_time.as_ref())
        .map(|ts| ts.0)
        .unwrap_or_else(Utc::now);

    format_duration(end.signed_duration_since(start.0))
}
