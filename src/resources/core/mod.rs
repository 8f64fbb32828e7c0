//! Core API group resources

pub mod configmap;
pub mod namespace;
pub mod pod;
pub mod secret;
pub mod service;

pub use configmap::new_config_map_list;
pub use namespace::new_namespace_list;
pub use pod::new_pod_list;
pub use secret::new_secret_list;
pub use service::new_service_list;
