//! Namespace resource implementation

use std::sync::Arc;

use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};

use crate::client::caller::KubeCaller;
use crate::resources::adapter::Adapter;
use crate::resources::list::{Access, List};
use crate::resources::traits::{Columnar, KubeKind, NamespaceScope, Row};

impl KubeKind for Namespace {
    const KIND: &'static str = "Namespace";
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "namespaces";
    const ALIASES: &'static [&'static str] = &["ns"];
    const NAMESPACED: bool = false;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn api(client: Client, _namespace: Option<&str>) -> Api<Self> {
        Api::all(client)
    }
}

impl Columnar for Namespace {
    const ACCESS: Access = Access::LIST
        .union(Access::GET)
        .union(Access::DELETE)
        .union(Access::DESCRIBE);

    fn columns() -> &'static [&'static str] {
        &["NAME", "STATUS", "AGE"]
    }

    fn values(&self) -> Row {
        let status = self
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        vec![self.name().to_string(), status, self.age()]
    }
}

/// New namespace list. Cluster-scoped; the scope argument only labels the
/// session.
pub fn new_namespace_list(client: Client, scope: NamespaceScope) -> List<Namespace> {
    let template = Adapter::new(Arc::new(KubeCaller::<Namespace>::new(client)));
    List::new(scope, Namespace::PLURAL, template, Namespace::ACCESS)
}
