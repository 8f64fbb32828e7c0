//! Core traits for resource kinds

use std::collections::BTreeMap;
use std::fmt::Debug;

use chrono::{DateTime, Duration, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};
use crate::resources::list::Access;

/// Ordered display values, one per header column.
///
/// A row is a positional contract: its order and length must match the
/// header it was rendered against.
pub type Row = Vec<String>;

/// Extension-column name to display value, for kind-specific extras that
/// are not part of the fixed header. Keys are unique per instance.
pub type Properties = BTreeMap<String, String>;

/// Namespace scope for a browse session: one namespace or all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceScope {
    /// All namespaces; tabular output gains a leading NAMESPACE column.
    All,
    /// A single named namespace.
    Named(String),
}

impl NamespaceScope {
    pub fn named(namespace: impl Into<String>) -> Self {
        Self::Named(namespace.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Namespace to query, `None` meaning all namespaces.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(ns) => Some(ns),
        }
    }
}

/// Split a `namespace/name` identity path.
///
/// Cluster-scoped objects carry a bare name; those split into an empty
/// namespace component.
pub fn split_path(path: &str) -> Result<(&str, &str)> {
    match path.split_once('/') {
        Some((ns, name)) if !name.is_empty() => Ok((ns, name)),
        Some(_) => Err(Error::InvalidPath(path.to_string())),
        None if !path.is_empty() => Ok(("", path)),
        None => Err(Error::InvalidPath(path.to_string())),
    }
}

/// Join namespace and name into an identity path.
pub fn join_path(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

/// Identity contract every supported kind implements.
pub trait KubeKind:
    Clone + Debug + DeserializeOwned + Serialize + Send + Sync + 'static
{
    /// The Kubernetes API kind (e.g., "Pod", "CronJob")
    const KIND: &'static str;

    /// The API group (e.g., "", "apps", "batch")
    const GROUP: &'static str;

    /// The API version (e.g., "v1")
    const VERSION: &'static str;

    /// Plural name for API path (e.g., "pods", "cronjobs")
    const PLURAL: &'static str;

    /// Short aliases (e.g., ["po"] for pods, ["cj"] for cronjobs)
    const ALIASES: &'static [&'static str] = &[];

    /// Whether this resource is namespaced
    const NAMESPACED: bool;

    /// Get object metadata
    fn metadata(&self) -> &ObjectMeta;

    /// Kube Api handle scoped to one namespace, or across the cluster
    /// when `None`.
    fn api(client: Client, namespace: Option<&str>) -> Api<Self>;

    /// Get the resource name
    fn name(&self) -> &str {
        self.metadata().name.as_deref().unwrap_or("<unknown>")
    }

    /// Get the resource namespace (if namespaced)
    fn namespace(&self) -> Option<&str> {
        self.metadata().namespace.as_deref()
    }

    /// `namespace/name` identity path; cluster-scoped kinds use the bare name.
    fn path(&self) -> String {
        match self.namespace() {
            Some(ns) => join_path(ns, self.name()),
            None => self.name().to_string(),
        }
    }

    /// The apiVersion string as it appears on the wire.
    fn api_version() -> String {
        if Self::GROUP.is_empty() {
            Self::VERSION.to_string()
        } else {
            format!("{}/{}", Self::GROUP, Self::VERSION)
        }
    }

    /// Get the creation timestamp as a human-readable age string
    fn age(&self) -> String {
        self.metadata()
            .creation_timestamp
            .as_ref()
            .map(|ts| humanize_duration(ts.0))
            .unwrap_or_else(|| "<unknown>".to_string())
    }
}

/// Tabular rendering contract: fixed per-kind columns and matching values.
///
/// The namespace column is not part of [`Columnar::columns`]; the adapter
/// prepends it when the scope spans all namespaces.
pub trait Columnar: KubeKind {
    /// Verbs a frontend may offer for this kind. Advisory only.
    const ACCESS: Access = Access::ALL_VERBS.union(Access::DESCRIBE);

    /// Fixed column names for this kind.
    fn columns() -> &'static [&'static str];

    /// Display values matching [`Columnar::columns`] in order and length.
    fn values(&self) -> Row;

    /// Additional non-positional display data.
    fn ext_fields(&self) -> Properties {
        Properties::new()
    }
}

/// Convert a chrono DateTime to a human-readable age string
pub fn humanize_duration(time: DateTime<Utc>) -> String {
    format_duration(Utc::now().signed_duration_since(time))
}

/// Render a duration with its largest whole unit
pub fn format_duration(duration: Duration) -> String {
    if duration.num_days() > 0 {
        format!("{}d", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m", duration.num_minutes())
    } else {
        format!("{}s", duration.num_seconds().max(0))
    }
}
