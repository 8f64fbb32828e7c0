//! Lists of resource adapters and the access-verb mask

use std::ops::BitOr;

use async_trait::async_trait;

use crate::error::Result;
use crate::resources::adapter::{Adapter, Tabular};
use crate::resources::traits::{Columnar, NamespaceScope, Row};

/// Bit mask of verbs valid for a kind.
///
/// Advisory metadata for frontends deciding which actions to offer; the
/// list itself never enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access(u32);

impl Access {
    pub const NONE: Access = Access(0);
    pub const LIST: Access = Access(1);
    pub const GET: Access = Access(1 << 1);
    pub const EDIT: Access = Access(1 << 2);
    pub const DELETE: Access = Access(1 << 3);
    pub const DESCRIBE: Access = Access(1 << 4);
    pub const RUN: Access = Access(1 << 5);

    /// The standard read/write verb set.
    pub const ALL_VERBS: Access =
        Access(Self::LIST.0 | Self::GET.0 | Self::EDIT.0 | Self::DELETE.0);

    pub const fn union(self, other: Access) -> Access {
        Access(self.0 | other.0)
    }

    pub const fn contains(self, verbs: Access) -> bool {
        self.0 & verbs.0 == verbs.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Access {
    type Output = Access;

    fn bitor(self, rhs: Access) -> Access {
        self.union(rhs)
    }
}

/// The set of resource adapters for one kind within one namespace scope.
///
/// Fixed at construction; holds no remote connection. Every
/// [`List::resources`] call re-fetches through the caller.
pub struct List<K> {
    scope: NamespaceScope,
    kind: &'static str,
    template: Adapter<K>,
    access: Access,
}

impl<K: Columnar> List<K> {
    pub fn new(
        scope: NamespaceScope,
        kind: &'static str,
        template: Adapter<K>,
        access: Access,
    ) -> Self {
        Self {
            scope,
            kind,
            template,
            access,
        }
    }

    pub fn kind(&self) -> &str {
        self.kind
    }

    pub fn scope(&self) -> &NamespaceScope {
        &self.scope
    }

    pub fn access(&self) -> Access {
        self.access
    }

    /// Template adapter; used purely for factory dispatch, never rendered.
    pub fn template(&self) -> &Adapter<K> {
        &self.template
    }

    /// Fetch the current objects and hydrate one populated adapter each.
    pub async fn resources(&self) -> Result<Vec<Adapter<K>>> {
        tracing::debug!(kind = self.kind, "listing resources");
        let items = self.template.caller().list(&self.scope).await?;
        Ok(items
            .into_iter()
            .map(|obj| self.template.new_instance(obj))
            .collect())
    }
}

/// Type-erased list surface for heterogeneous frontends.
#[async_trait]
pub trait ResourceList: Send + Sync {
    fn kind(&self) -> &str;

    fn scope(&self) -> &NamespaceScope;

    fn access(&self) -> Access;

    /// Column names for this list's scope.
    fn header(&self) -> Row;

    /// Fetch and hydrate, erased to the uniform tabular surface.
    async fn hydrate(&self) -> Result<Vec<Box<dyn Tabular>>>;
}

#[async_trait]
impl<K: Columnar> ResourceList for List<K> {
    fn kind(&self) -> &str {
        self.kind
    }

    fn scope(&self) -> &NamespaceScope {
        &self.scope
    }

    fn access(&self) -> Access {
        self.access
    }

    fn header(&self) -> Row {
        self.template.header(&self.scope)
    }

    async fn hydrate(&self) -> Result<Vec<Box<dyn Tabular>>> {
        let adapters = self.resources().await?;
        Ok(adapters
            .into_iter()
            .map(|adapter| Box::new(adapter) as Box<dyn Tabular>)
            .collect())
    }
}
