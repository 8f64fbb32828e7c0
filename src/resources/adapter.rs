//! Shared adapter scaffolding and the uniform tabular surface

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::error::{Error, Result};
use crate::resources::traits::{split_path, Columnar, NamespaceScope, Properties, Row};

/// Remote access for one kind.
///
/// Each call is a single synchronous best-effort request; errors surface
/// verbatim. Concurrency safety is the implementation's responsibility.
#[async_trait]
pub trait Caller<K>: Send + Sync {
    /// Fetch one object by identity.
    async fn get(&self, namespace: &str, name: &str) -> Result<K>;

    /// Fetch all objects within the scope.
    async fn list(&self, scope: &NamespaceScope) -> Result<Vec<K>>;

    /// Delete one object by identity.
    async fn delete(&self, namespace: &str, name: &str) -> Result<()>;
}

/// Optional imperative-action capability of a caller.
#[async_trait]
pub trait Runnable: Send + Sync {
    /// Trigger an out-of-band action against the object. Success or
    /// failure only, no result payload.
    async fn run(&self, namespace: &str, name: &str) -> Result<()>;
}

/// A raw fetched object, in owned or shared-handle form.
///
/// Both forms populate an adapter identically.
pub enum Raw<K> {
    Owned(K),
    Shared(Arc<K>),
}

impl<K> From<K> for Raw<K> {
    fn from(value: K) -> Self {
        Self::Owned(value)
    }
}

impl<K> From<Arc<K>> for Raw<K> {
    fn from(handle: Arc<K>) -> Self {
        Self::Shared(handle)
    }
}

impl<K: Clone> Raw<K> {
    fn into_owned(self) -> K {
        match self {
            Self::Owned(value) => value,
            Self::Shared(handle) => Arc::try_unwrap(handle).unwrap_or_else(|h| (*h).clone()),
        }
    }
}

/// One instance of a cluster object kind bound for display or action.
///
/// Owns the caller handle, the optional run capability, the identity path
/// and the loaded object. A list constructor creates it empty as a factory
/// template; [`Adapter::new_instance`] populates it; it is discarded after
/// one render/action cycle, never cached.
#[derive(Clone)]
pub struct Adapter<K> {
    caller: Arc<dyn Caller<K>>,
    runner: Option<Arc<dyn Runnable>>,
    path: String,
    instance: Option<K>,
}

impl<K: Columnar> Adapter<K> {
    pub fn new(caller: Arc<dyn Caller<K>>) -> Self {
        Self {
            caller,
            runner: None,
            path: String::new(),
            instance: None,
        }
    }

    /// Attach the run capability. Bound once here, checked on each `run` call.
    pub fn with_runner(mut self, runner: Arc<dyn Runnable>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Build a populated adapter from a raw fetched object.
    ///
    /// Accepts the object by value or behind a shared handle; either form
    /// yields the same populated adapter.
    pub fn new_instance(&self, raw: impl Into<Raw<K>>) -> Self {
        let instance = raw.into().into_owned();
        Self {
            caller: Arc::clone(&self.caller),
            runner: self.runner.clone(),
            path: instance.path(),
            instance: Some(instance),
        }
    }

    /// The loaded object, if this adapter has been populated.
    pub fn instance(&self) -> Option<&K> {
        self.instance.as_ref()
    }

    pub(crate) fn caller(&self) -> &Arc<dyn Caller<K>> {
        &self.caller
    }

    fn loaded(&self) -> &K {
        self.instance
            .as_ref()
            .expect("adapter not populated; new_instance must run first")
    }
}

/// Uniform surface consumed by list/table/detail frontends.
#[async_trait]
pub trait Tabular: Send + Sync {
    /// Identity path of the loaded object, empty for a template adapter.
    fn path(&self) -> &str;

    /// Ordered column names for the scope.
    fn header(&self, scope: &NamespaceScope) -> Row;

    /// One row matching [`Tabular::header`] in order and length.
    ///
    /// Panics when the adapter has not been populated.
    fn fields(&self, scope: &NamespaceScope) -> Row;

    /// Additional non-positional display data.
    fn ext_fields(&self) -> Properties;

    /// Serialize one object to YAML, re-fetched live from the cluster.
    async fn marshal(&self, path: &str) -> Result<String>;

    /// Delete one object by identity path.
    async fn delete(&self, path: &str) -> Result<()>;

    /// Trigger the kind's imperative action, when the caller supports one.
    async fn run(&self, path: &str) -> Result<()>;
}

#[async_trait]
impl<K: Columnar> Tabular for Adapter<K> {
    fn path(&self) -> &str {
        &self.path
    }

    fn header(&self, scope: &NamespaceScope) -> Row {
        let mut row = Row::new();
        if scope.is_all() && K::NAMESPACED {
            row.push("NAMESPACE".to_string());
        }
        row.extend(K::columns().iter().map(|c| c.to_string()));
        row
    }

    fn fields(&self, scope: &NamespaceScope) -> Row {
        let instance = self.loaded();
        let mut row = Row::new();
        if scope.is_all() && K::NAMESPACED {
            row.push(instance.namespace().unwrap_or_default().to_string());
        }
        row.extend(instance.values());
        row
    }

    fn ext_fields(&self) -> Properties {
        self.loaded().ext_fields()
    }

    async fn marshal(&self, path: &str) -> Result<String> {
        let (namespace, name) = split_path(path)?;
        tracing::debug!(kind = K::KIND, path, "fetching resource for marshal");
        let obj = self.caller.get(namespace, name).await?;

        // k8s-openapi objects serialize without their type identity; stamp
        // apiVersion and kind so the output identifies itself when parsed back.
        let mut value = serde_json::to_value(&obj)?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert("apiVersion".to_string(), json!(K::api_version()));
            map.insert("kind".to_string(), json!(K::KIND));
        }
        Ok(serde_yaml::to_string(&value)?)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let (namespace, name) = split_path(path)?;
        tracing::info!(kind = K::KIND, path, "deleting resource");
        self.caller.delete(namespace, name).await
    }

    async fn run(&self, path: &str) -> Result<()> {
        let (namespace, name) = split_path(path)?;
        match &self.runner {
            Some(runner) => {
                tracing::info!(kind = K::KIND, path, "dispatching run");
                runner.run(namespace, name).await
            }
            None => Err(Error::RunUnsupported {
                path: path.to_string(),
            }),
        }
    }
}
