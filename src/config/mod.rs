//! Application configuration for kubetab

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::resources::traits::NamespaceScope;

/// Application configuration stored in ~/.kubetab/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Kube context to use; the kubeconfig's current context when unset.
    pub context: Option<String>,

    /// Default namespace to browse; all namespaces when unset.
    pub namespace: Option<String>,

    /// Whether table output uses colors
    #[serde(default = "default_true")]
    pub colors: bool,
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Namespace scope this configuration selects.
    pub fn scope(&self) -> NamespaceScope {
        match &self.namespace {
            Some(ns) => NamespaceScope::named(ns.clone()),
            None => NamespaceScope::All,
        }
    }
}

/// Get the kubetab config directory (~/.kubetab)
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".kubetab"))
        .ok_or_else(|| Error::Config("could not determine home directory".to_string()))
}

/// Load application config from ~/.kubetab/config.toml
pub fn load_config() -> Result<AppConfig> {
    let path = config_dir()?.join("config.toml");
    if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    } else {
        Ok(AppConfig::default())
    }
}
