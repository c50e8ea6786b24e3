// Game server discovery and start/stop on top of the engine client.

mod error;
mod ports;

pub use error::{ErrorKind, ServerError};

use crate::config::DiscoveryConfig;
use crate::docker_repo::EngineClient;
use crate::models::{ServerInfo, UNKNOWN};
use bollard::models::ContainerInspectResponse;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Grace period before the engine kills a stopping container.
pub const DEFAULT_STOP_TIMEOUT_SECS: u32 = 10;

pub struct ServerService {
    client: Arc<dyn EngineClient>,
    discovery: DiscoveryConfig,
}

impl ServerService {
    pub fn new(client: Arc<dyn EngineClient>, discovery: DiscoveryConfig) -> Self {
        Self { client, discovery }
    }

    /// All containers carrying the discovery label, in any state, sorted by name
    /// (case-insensitive). Nothing is cached; every call queries the engine.
    pub async fn list_servers(&self) -> Result<Vec<ServerInfo>, ServerError> {
        let containers = self
            .client
            .list_containers(&self.discovery.label)
            .await
            .map_err(|e| {
                warn!(error = %e, operation = "list_containers", "Docker list failed");
                ServerError::from_listing(e)
            })?;

        let mut servers: Vec<ServerInfo> = containers
            .iter()
            .map(|c| server_info(c, &self.discovery.type_label))
            .collect();
        servers.sort_by_cached_key(|s| s.name.to_lowercase());

        debug!(
            operation = "list_servers",
            servers_count = servers.len(),
            "Servers listed"
        );
        Ok(servers)
    }

    pub async fn start_server(&self, id: &str) -> Result<(), ServerError> {
        let target = self.resolve(id).await?;
        info!(container = %target, "Starting server");
        match self.client.start(&target).await {
            Ok(()) => Ok(()),
            Err(e) if error::is_not_modified(&e) => {
                debug!(container = %target, "Server already running");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, container = %target, operation = "start", "Start failed");
                Err(ServerError::from_engine(e, id))
            }
        }
    }

    /// Stop a server, forwarding `timeout_secs` to the engine as the grace period.
    pub async fn stop_server(&self, id: &str, timeout_secs: u32) -> Result<(), ServerError> {
        let target = self.resolve(id).await?;
        info!(container = %target, timeout_secs, "Stopping server");
        match self.client.stop(&target, timeout_secs).await {
            Ok(()) => Ok(()),
            Err(e) if error::is_not_modified(&e) => {
                debug!(container = %target, "Server already stopped");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, container = %target, operation = "stop", "Stop failed");
                Err(ServerError::from_engine(e, id))
            }
        }
    }

    /// Look the container up before acting on it, so an unknown id never reaches start/stop.
    async fn resolve(&self, id: &str) -> Result<String, ServerError> {
        let container = self
            .client
            .get_container(id)
            .await
            .map_err(|e| ServerError::from_engine(e, id))?;
        Ok(container.id.unwrap_or_else(|| id.to_string()))
    }
}

/// Normalize a raw inspect payload. Every field falls back to a default when absent.
fn server_info(c: &ContainerInspectResponse, type_label: &str) -> ServerInfo {
    let id = c.id.clone().unwrap_or_default();
    let name = c
        .name
        .as_deref()
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_else(|| id.clone());

    let status = c
        .state
        .as_ref()
        .and_then(|s| s.status.as_ref())
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let mc_type = c
        .config
        .as_ref()
        .and_then(|cfg| cfg.labels.as_ref())
        .and_then(|labels| labels.get(type_label))
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string());

    let ports = ports::format_ports(
        c.network_settings
            .as_ref()
            .and_then(|n| n.ports.as_ref()),
    );

    ServerInfo {
        is_running: status == "running",
        id,
        name,
        status,
        mc_type,
        ports,
    }
}
