//! Service resource implementation

use std::sync::Arc;

use k8s_openapi::api::core::v1::Service;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::KubeCaller;
use crate::resources::adapter::Adapter;
use crate::resources::list::List;
use crate::resources::traits::{Columnar, KubeKind, NamespaceScope, Row};

impl KubeKind for Service {
    const KIND: &'static str = "Service";
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "services";
    const ALIASES: &'static [&'static str] = &["svc"];
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

impl Columnar for Service {
    fn columns() -> &'static [&'static str] {
        &["NAME", "TYPE", "CLUSTER-IP", "EXTERNAL-IP", "PORT(S)", "AGE"]
    }

    fn values(&self) -> Row {
        let spec = self.spec.as_ref();

        let svc_type = spec
            .and_then(|s| s.type_.clone())
            .unwrap_or_else(|| "ClusterIP".to_string());

        let cluster_ip = spec
            .and_then(|s| s.cluster_ip.clone())
            .unwrap_or_else(|| "<none>".to_string());

        vec![
            self.name().to_string(),
            svc_type,
            cluster_ip,
            external_ips(self),
            ports(self),
            self.age(),
        ]
    }
}

/// New service list.
pub fn new_service_list(client: Client, scope: NamespaceScope) -> List<Service> {
    let template = Adapter::new(Arc::new(KubeCaller::<Service>::new(client)));
    List::new(scope, Service::PLURAL, template, Service::ACCESS)
}

fn external_ips(svc: &Service) -> String {
    svc.spec
        .as_ref()
        .and_then(|s| s.external_ips.as_ref())
        .filter(|ips| !ips.is_empty())
        .map(|ips| ips.join(","))
        .unwrap_or_else(|| "<none>".to_string())
}

/// `port[:nodePort]/protocol` per exposed port, comma separated.
fn ports(svc: &Service) -> String {
    let Some(ports) = svc.spec.as_ref().and_then(|s| s.ports.as_ref()) else {
        return "<none>".to_string();
    };

    ports
        .iter()
        .map(|p| {
            let protocol = p.protocol.as_deref().unwrap_or("TCP");
            match p.node_port {
                Some(node_port) => format!("{}:{}/{}", p.port, node_port, protocol),
                None => format!("{}/{}", p.port, protocol),
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
