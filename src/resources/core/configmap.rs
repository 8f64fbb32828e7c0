//! ConfigMap resource implementation

use std::sync::Arc;

use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::KubeCaller;
use crate::resources::adapter::Adapter;
use crate::resources::list::List;
use crate::resources::traits::{Columnar, KubeKind, NamespaceScope, Row};

impl KubeKind for ConfigMap {
    const KIND: &'static str = "ConfigMap";
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "configmaps";
    const ALIASES: &'static [&'static str] = &["cm"];
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

impl Columnar for ConfigMap {
    fn columns() -> &'static [&'static str] {
        &["NAME", "DATA", "AGE"]
    }

    fn values(&self) -> Row {
        // DATA counts entries, plain and binary alike, not their contents.
        let entries = self.data.as_ref().map(|d| d.len()).unwrap_or(0)
            + self.binary_data.as_ref().map(|d| d.len()).unwrap_or(0);

        vec![self.name().to_string(), entries.to_string(), self.age()]
    }
}

/// New configmap list.
pub fn new_config_map_list(client: Client, scope: NamespaceScope) -> List<ConfigMap> {
    let template = Adapter::new(Arc::new(KubeCaller::<ConfigMap>::new(client)));
    List::new(scope, ConfigMap::PLURAL, template, ConfigMap::ACCESS)
}
