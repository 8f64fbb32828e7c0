//! Kube-backed caller implementations

use std::collections::BTreeMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use k8s_openapi::api::batch::v1::{CronJob, Job};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client};

use crate::error::{Error, Result};
use crate::resources::adapter::{Caller, Runnable};
use crate::resources::traits::{KubeKind, NamespaceScope};

/// Caller backed by the cluster API, generic over the kind.
#[derive(Clone)]
pub struct KubeCaller<K> {
    client: Client,
    _kind: PhantomData<K>,
}

impl<K> KubeCaller<K> {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<K: KubeKind> Caller<K> for KubeCaller<K> {
    async fn get(&self, namespace: &str, name: &str) -> Result<K> {
        let api = self.scoped_api(namespace);
        Ok(api.get(name).await?)
    }

    async fn list(&self, scope: &NamespaceScope) -> Result<Vec<K>> {
        let api = K::api(self.client.clone(), scope.name());
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items)
    }

    async fn delete(&self, namespace: &str, name: &str) -> Result<()> {
        let api = self.scoped_api(namespace);
        api.delete(name, &DeleteParams::default()).await?;
        Ok(())
    }
}

impl<K: KubeKind> KubeCaller<K> {
    /// Cluster-scoped identity paths carry an empty namespace component.
    fn scoped_api(&self, namespace: &str) -> Api<K> {
        let ns = (!namespace.is_empty()).then_some(namespace);
        K::api(self.client.clone(), ns)
    }
}

/// Runs a cron job on demand by instantiating a job from its template,
/// the way an on-schedule run would, with an owner reference back to the
/// cron job and a manual-instantiate annotation.
pub struct CronJobRunner {
    client: Client,
}

impl CronJobRunner {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Runnable for CronJobRunner {
    async fn run(&self, namespace: &str, name: &str) -> Result<()> {
        let cronjobs: Api<CronJob> = Api::namespaced(self.client.clone(), namespace);
        let cj = cronjobs.get(name).await?;

        let template = cj
            .spec
            .as_ref()
            .map(|s| s.job_template.clone())
            .ok_or_else(|| {
                Error::InvalidArgument(format!("cron job {namespace}/{name} has no job template"))
            })?;

        let mut annotations = BTreeMap::new();
        annotations.insert(
            "cronjob.kubernetes.io/instantiate".to_string(),
            "manual".to_string(),
        );

        let owner = OwnerReference {
            api_version: CronJob::api_version(),
            kind: CronJob::KIND.to_string(),
            name: cj.name().to_string(),
            uid: cj.metadata.uid.clone().unwrap_or_default(),
            ..Default::default()
        };

        let job = Job {
            metadata: ObjectMeta {
                generate_name: Some(format!("{name}-manual-")),
                namespace: Some(namespace.to_string()),
                annotations: Some(annotations),
                owner_references: Some(vec![owner]),
                labels: template.metadata.as_ref().and_then(|m| m.labels.clone()),
                ..Default::default()
            },
            spec: template.spec,
            status: None,
        };

        let jobs: Api<Job> = Api::namespaced(self.client.clone(), namespace);
        jobs.create(&PostParams::default(), &job).await?;
        tracing::info!(namespace, name, "manually triggered cron job");
        Ok(())
    }
}
