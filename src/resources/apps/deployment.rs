//! Deployment resource implementation

use std::sync::Arc;

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::KubeCaller;
use crate::resources::adapter::Adapter;
use crate::resources::list::List;
use crate::resources::traits::{Columnar, KubeKind, NamespaceScope, Properties, Row};

impl KubeKind for Deployment {
    const KIND: &'static str = "Deployment";
    const GROUP: &'static str = "apps";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "deployments";
    const ALIASES: &'static [&'static str] = &["deploy"];
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

impl Columnar for Deployment {
    fn columns() -> &'static [&'static str] {
        &["NAME", "READY", "UP-TO-DATE", "AVAILABLE", "AGE"]
    }

    fn values(&self) -> Row {
        let status = self.status.as_ref();

        let desired = self.spec.as_ref().and_then(|s| s.replicas).unwrap_or(0);
        let ready = status.and_then(|s| s.ready_replicas).unwrap_or(0);
        let updated = status.and_then(|s| s.updated_replicas).unwrap_or(0);
        let available = status.and_then(|s| s.available_replicas).unwrap_or(0);

        vec![
            self.name().to_string(),
            format!("{}/{}", ready, desired),
            updated.to_string(),
            available.to_string(),
            self.age(),
        ]
    }

    fn ext_fields(&self) -> Properties {
        let mut props = Properties::new();
        let (containers, images) = container_info(self);
        props.insert("containers".to_string(), containers);
        props.insert("images".to_string(), images);
        props
    }
}

/// New deployment list.
pub fn new_deployment_list(client: Client, scope: NamespaceScope) -> List<Deployment> {
    let template = Adapter::new(Arc::new(KubeCaller::<Deployment>::new(client)));
    List::new(scope, Deployment::PLURAL, template, Deployment::ACCESS)
}

fn container_info(deploy: &Deployment) -> (String, String) {
    let Some(pod_spec) = deploy
        .spec
        .as_ref()
        .and_then(|s| s.template.spec.as_ref())
    else {
        return ("<none>".to_string(), "<none>".to_string());
    };

    let containers: Vec<&str> = pod_spec
        .containers
        .iter()
        .map(|c| c.name.as_str())
        .collect();

    let images: Vec<&str> = pod_spec
        .containers
        .iter()
        .filter_map(|c| c.image.as_deref())
        .collect();

    (containers.join(","), images.join(","))
}
