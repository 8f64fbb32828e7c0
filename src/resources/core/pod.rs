//! Pod resource implementation

use std::sync::Arc;

use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::KubeCaller;
use crate::resources::adapter::Adapter;
use crate::resources::list::List;
use crate::resources::traits::{Columnar, KubeKind, NamespaceScope, Properties, Row};

impl KubeKind for Pod {
    const KIND: &'static str = "Pod";
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "pods";
    const ALIASES: &'static [&'static str] = &["po"];
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

impl Columnar for Pod {
    fn columns() -> &'static [&'static str] {
        &["NAME", "READY", "STATUS", "RESTARTS", "AGE"]
    }

    fn values(&self) -> Row {
        vec![
            self.name().to_string(),
            ready(self),
            phase(self),
            restarts(self).to_string(),
            self.age(),
        ]
    }

    fn ext_fields(&self) -> Properties {
        let mut props = Properties::new();
        if let Some(ip) = self.status.as_ref().and_then(|s| s.pod_ip.clone()) {
            props.insert("ip".to_string(), ip);
        }
        if let Some(node) = self.spec.as_ref().and_then(|s| s.node_name.clone()) {
            props.insert("node".to_string(), node);
        }
        props
    }
}

/// New pod list.
pub fn new_pod_list(client: Client, scope: NamespaceScope) -> List<Pod> {
    let template = Adapter::new(Arc::new(KubeCaller::<Pod>::new(client)));
    List::new(scope, Pod::PLURAL, template, Pod::ACCESS)
}

/// Ready container count over total, e.g. `1/2`.
fn ready(pod: &Pod) -> String {
    let total = pod
        .spec
        .as_ref()
        .map(|s| s.containers.len())
        .unwrap_or(0);

    let ready = pod
        .status
        .as_ref()
        .and_then(|s| s.container_statuses.as_ref())
        .map(|statuses| statuses.iter().filter(|c| c.ready).count())
        .unwrap_or(0);

    format!("{}/{}", ready, total)
}

/// Display status: waiting/terminated reasons win over the bare phase.
fn phase(pod: &Pod) -> String {
    if pod.metadata.deletion_timestamp.is_some() {
        return "Terminating".to_string();
    }

    let Some(status) = &pod.status else {
        return "Unknown".to_string();
    };

    if let Some(statuses) = &status.container_statuses {
        for cs in statuses {
            let reason = cs.state.as_ref().and_then(|state| {
                state
                    .waiting
                    .as_ref()
                    .and_then(|w| w.reason.clone())
                    .or_else(|| state.terminated.as_ref().and_then(|t| t.reason.clone()))
            });
            if let Some(reason) = reason {
                return reason;
            }
        }
    }

    status.phase.clone().unwrap_or_else(|| "Unknown".to_string())
}

fn restarts(pod: &Pod) -> i32 {
    pod.status
        .as_ref()
        .and_then(|s| s.container_statuses.as_ref())
        .map(|statuses| statuses.iter().map(|c| c.restart_count).sum())
        .unwrap_or(0)
}
