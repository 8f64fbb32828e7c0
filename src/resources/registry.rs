//! Kind registry: metadata lookup and typed list construction

use std::collections::HashMap;
use std::sync::LazyLock;

use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::api::batch::v1::{CronJob, Job};
use k8s_openapi::api::core::v1::{ConfigMap, Namespace, Pod, Secret, Service};
use kube::Client;

use crate::resources::apps::{new_deployment_list, new_stateful_set_list};
use crate::resources::batch::{new_cron_job_list, new_job_list};
use crate::resources::core::{
    new_config_map_list, new_namespace_list, new_pod_list, new_secret_list, new_service_list,
};
use crate::resources::list::{Access, ResourceList};
use crate::resources::traits::{Columnar, NamespaceScope};

/// Static description of one supported kind.
#[derive(Debug, Clone)]
pub struct ResourceInfo {
    pub kind: &'static str,
    pub group: &'static str,
    pub version: &'static str,
    pub plural: &'static str,
    pub aliases: &'static [&'static str],
    pub namespaced: bool,
    pub access: Access,
}

/// Registry entry derived from a kind's consts, so the table cannot drift
/// from the trait impls.
fn info_of<K: Columnar>() -> ResourceInfo {
    ResourceInfo {
        kind: K::KIND,
        group: K::GROUP,
        version: K::VERSION,
        plural: K::PLURAL,
        aliases: K::ALIASES,
        namespaced: K::NAMESPACED,
        access: K::ACCESS,
    }
}

/// Global resource registry
pub static RESOURCE_REGISTRY: LazyLock<ResourceRegistry> = LazyLock::new(ResourceRegistry::new);

/// Registry for looking up resource kinds by name or alias
pub struct ResourceRegistry {
    by_plural: HashMap<String, ResourceInfo>,
    by_kind: HashMap<String, ResourceInfo>,
    by_alias: HashMap<String, ResourceInfo>,
}

impl ResourceRegistry {
    fn new() -> Self {
        let mut registry = Self {
            by_plural: HashMap::new(),
            by_kind: HashMap::new(),
            by_alias: HashMap::new(),
        };

        registry.register(info_of::<Namespace>());
        registry.register(info_of::<Pod>());
        registry.register(info_of::<ConfigMap>());
        registry.register(info_of::<Secret>());
        registry.register(info_of::<Service>());
        registry.register(info_of::<Deployment>());
        registry.register(info_of::<StatefulSet>());
        registry.register(info_of::<CronJob>());
        registry.register(info_of::<Job>());

        registry
    }

    fn register(&mut self, info: ResourceInfo) {
        self.by_plural
            .insert(info.plural.to_lowercase(), info.clone());
        self.by_kind.insert(info.kind.to_lowercase(), info.clone());

        for alias in info.aliases {
            self.by_alias.insert(alias.to_lowercase(), info.clone());
        }
    }

    /// Look up resource info by kind, plural, or alias
    pub fn lookup(&self, name: &str) -> Option<&ResourceInfo> {
        let name_lower = name.to_lowercase();

        self.by_plural
            .get(&name_lower)
            .or_else(|| self.by_kind.get(&name_lower))
            .or_else(|| self.by_alias.get(&name_lower))
    }

    /// Get all registered resource kinds
    pub fn all(&self) -> impl Iterator<Item = &ResourceInfo> {
        self.by_plural.values()
    }

    /// Get all resource names and aliases for completion
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_plural.keys().map(|s| s.as_str()).collect();
        names.extend(self.by_alias.keys().map(|s| s.as_str()));
        names.sort();
        names.dedup();
        names
    }

    /// Construct a list for a kind name (plural, kind or alias form).
    ///
    /// The mapping from kind identifier to constructor is fixed at compile
    /// time; only names absent from the registry fail.
    pub fn make_list(
        &self,
        name: &str,
        client: Client,
        scope: NamespaceScope,
    ) -> Option<Box<dyn ResourceList>> {
        let info = self.lookup(name)?;
        let list: Box<dyn ResourceList> = match info.kind {
            "Namespace" => Box::new(new_namespace_list(client, scope)),
            "Pod" => Box::new(new_pod_list(client, scope)),
            "ConfigMap" => Box::new(new_config_map_list(client, scope)),
            "Secret" => Box::new(new_secret_list(client, scope)),
            "Service" => Box::new(new_service_list(client, scope)),
            "Deployment" => Box::new(new_deployment_list(client, scope)),
            "StatefulSet" => Box::new(new_stateful_set_list(client, scope)),
            "CronJob" => Box::new(new_cron_job_list(client, scope)),
            "Job" => Box::new(new_job_list(client, scope)),
            _ => return None,
        };
        Some(list)
    }
}
