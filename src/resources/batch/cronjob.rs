//! CronJob resource implementation

use std::sync::Arc;

use k8s_openapi::api::batch::v1::CronJob;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::{CronJobRunner, KubeCaller};
use crate::resources::adapter::Adapter;
use crate::resources::list::{Access, List};
use crate::resources::traits::{
    humanize_duration, Columnar, KubeKind, NamespaceScope, Properties, Row,
};

impl KubeKind for CronJob {
    const KIND: &'static str = "CronJob";
    const GROUP: &'static str = "batch";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "cronjobs";
    const ALIASES: &'static [&'static str] = &["cj"];
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

impl Columnar for CronJob {
    const ACCESS: Access = Access::ALL_VERBS
        .union(Access::DESCRIBE)
        .union(Access::RUN);

    fn columns() -> &'static [&'static str] {
        &["NAME", "SCHEDULE", "SUSPEND", "ACTIVE", "LAST_SCHEDULE", "AGE"]
    }

    fn values(&self) -> Row {
        let schedule = self
            .spec
            .as_ref()
            .map(|s| s.schedule.clone())
            .unwrap_or_default();

        let suspend = self.spec.as_ref().and_then(|s| s.suspend).unwrap_or(false);

        let active = self
            .status
            .as_ref()
            .and_then(|s| s.active.as_ref())
            .map(|refs| refs.len())
            .unwrap_or(0);

        let last_schedule = self
            .status
            .as_ref()
            .and_then(|s| s.last_schedule_time.as_ref())
            .map(|ts| humanize_duration(ts.0))
            .unwrap_or_else(|| "<none>".to_string());

        vec![
            self.name().to_string(),
            schedule,
            suspend.to_string(),
            active.to_string(),
            last_schedule,
            self.age(),
        ]
    }

    fn ext_fields(&self) -> Properties {
        let mut props = Properties::new();
        props.insert("containers".to_string(), container_names(self));
        props.insert("images".to_string(), container_images(self));
        props.insert("selector".to_string(), selector(self));
        props
    }
}

/// New cronjob list with the manual-trigger runner attached.
pub fn new_cron_job_list(client: Client, scope: NamespaceScope) -> List<CronJob> {
    let template = Adapter::new(Arc::new(KubeCaller::<CronJob>::new(client.clone())))
        .with_runner(Arc::new(CronJobRunner::new(client)));
    List::new(scope, CronJob::PLURAL, template, CronJob::ACCESS)
}

fn container_names(cj: &CronJob) -> String {
    containers(cj, |c| Some(c.name.clone()))
}

fn container_images(cj: &CronJob) -> String {
    containers(cj, |c| c.image.clone())
}

fn containers(
    cj: &CronJob,
    pick: impl Fn(&k8s_openapi::api::core::v1::Container) -> Option<String>,
) -> String {
    cj.spec
        .as_ref()
        .and_then(|s| s.job_template.spec.as_ref())
        .and_then(|js| js.template.spec.as_ref())
        .map(|pod| {
            pod.containers
                .iter()
                .filter_map(&pick)
                .collect::<Vec<_>>()
                .join(",")
        })
        .filter(|joined| !joined.is_empty())
        .unwrap_or_else(|| "<none>".to_string())
}

fn selector(cj: &CronJob) -> String {
    cj.spec
        .as_ref()
        .and_then(|s| s.job_template.spec.as_ref())
        .and_then(|js| js.selector.as_ref())
        .and_then(|sel| sel.match_labels.as_ref())
        .map(|labels| {
            let mut pairs: Vec<String> =
                labels.iter().map(|(k, v)| format!("{k}={v}")).collect();
            pairs.sort();
            pairs.join(",")
        })
        .unwrap_or_else(|| "<none>".to_string())
}
