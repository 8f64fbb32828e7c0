//! Secret resource implementation

use std::sync::Arc;

use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::KubeCaller;
use crate::resources::adapter::Adapter;
use crate::resources::list::List;
use crate::resources::traits::{Columnar, KubeKind, NamespaceScope, Row};

impl KubeKind for Secret {
    const KIND: &'static str = "Secret";
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "secrets";
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

impl Columnar for Secret {
    fn columns() -> &'static [&'static str] {
        &["NAME", "TYPE", "DATA", "AGE"]
    }

    fn values(&self) -> Row {
        let secret_type = self.type_.clone().unwrap_or_else(|| "Opaque".to_string());
        let entries = self.data.as_ref().map(|d| d.len()).unwrap_or(0);

        vec![
            self.name().to_string(),
            secret_type,
            entries.to_string(),
            self.age(),
        ]
    }
}

/// New secret list.
pub fn new_secret_list(client: Client, scope: NamespaceScope) -> List<Secret> {
    let template = Adapter::new(Arc::new(KubeCaller::<Secret>::new(client)));
    List::new(scope, Secret::PLURAL, template, Secret::ACCESS)
}
