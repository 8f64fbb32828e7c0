//! StatefulSet resource implementation

use std::sync::Arc;

use k8s_openapi::api::apps::v1::StatefulSet;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::KubeCaller;
use crate::resources::adapter::Adapter;
use crate::resources::list::List;
use crate::resources::traits::{Columnar, KubeKind, NamespaceScope, Row};

impl KubeKind for StatefulSet {
    const KIND: &'static str = "StatefulSet";
    const GROUP: &'static str = "apps";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "statefulsets";
    const ALIASES: &'static [&'static str] = &["sts"];
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

impl Columnar for StatefulSet {
    fn columns() -> &'static [&'static str] {
        &["NAME", "READY", "AGE"]
    }

    fn values(&self) -> Row {
        let desired = self.spec.as_ref().and_then(|s| s.replicas).unwrap_or(0);
        let ready = self
            .status
            .as_ref()
            .and_then(|s| s.ready_replicas)
            .unwrap_or(0);

        vec![
            self.name().to_string(),
            format!("{}/{}", ready, desired),
            self.age(),
        ]
    }
}

/// New statefulset list.
pub fn new_stateful_set_list(client: Client, scope: NamespaceScope) -> List<StatefulSet> {
    let template = Adapter::new(Arc::new(KubeCaller::<StatefulSet>::new(client)));
    List::new(scope, StatefulSet::PLURAL, template, StatefulSet::ACCESS)
}
