//! Resource kinds, adapters and lists

pub mod adapter;
pub mod apps;
pub mod batch;
pub mod core;
pub mod list;
pub mod registry;
pub mod traits;

pub use adapter::{Adapter, Caller, Raw, Runnable, Tabular};
pub use list::{Access, List, ResourceList};
pub use registry::{ResourceInfo, ResourceRegistry, RESOURCE_REGISTRY};
pub use traits::*;
