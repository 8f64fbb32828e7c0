//! Kubernetes client bootstrap and the kube-backed callers

pub mod caller;

pub use caller::{CronJobRunner, KubeCaller};

use kube::{config::KubeConfigOptions, Client, Config};

use crate::error::{Error, Result};

/// Create a Kubernetes client for the specified context
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = load_config(context).await?;
    Client::try_from(config).map_err(Error::from)
}

/// Load Kubernetes configuration for a context
async fn load_config(context: Option<&str>) -> Result<Config> {
    let options = KubeConfigOptions {
        context: context.map(String::from),
        ..Default::default()
    };

    Config::from_kubeconfig(&options)
        .await
        .map_err(|e| Error::Config(format!("Failed to load kubeconfig: {e}")))
}

/// Get the current context name from kubeconfig
pub fn current_context() -> Result<String> {
    let kubeconfig = read_kubeconfig()?;
    kubeconfig
        .current_context
        .ok_or_else(|| Error::Config("no current context in kubeconfig".to_string()))
}

/// Default namespace configured for a context, if any.
///
/// Falls back to the current context when none is named.
pub fn default_namespace(context: Option<&str>) -> Result<Option<String>> {
    let kubeconfig = read_kubeconfig()?;

    let wanted = match context {
        Some(name) => name.to_string(),
        None => kubeconfig
            .current_context
            .clone()
            .ok_or_else(|| Error::Config("no current context in kubeconfig".to_string()))?,
    };

    Ok(kubeconfig
        .contexts
        .iter()
        .find(|ctx| ctx.name == wanted)
        .and_then(|ctx| ctx.context.as_ref())
        .and_then(|ctx| ctx.namespace.clone()))
}

fn read_kubeconfig() -> Result<kube::config::Kubeconfig> {
    kube::config::Kubeconfig::read()
        .map_err(|e| Error::Config(format!("Failed to read kubeconfig: {e}")))
}
