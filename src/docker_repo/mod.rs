// Docker engine access via bollard

use async_trait::async_trait;
use bollard::Docker;
use bollard::errors::Error;
use bollard::models::ContainerInspectResponse;
use bollard::query_parameters::{
    InspectContainerOptions, ListContainersOptions, StartContainerOptions, StopContainerOptions,
};
use std::collections::HashMap;

/// Raw container primitives. Engine errors are returned as-is; callers classify them.
#[async_trait]
pub trait EngineClient: Send + Sync {
    /// Inspect every container (any state) matching `label` (`key` or `key=value`).
    async fn list_containers(&self, label: &str) -> Result<Vec<ContainerInspectResponse>, Error>;

    /// Inspect a single container by id or name. A 404 from the engine means it does not exist.
    async fn get_container(&self, id: &str) -> Result<ContainerInspectResponse, Error>;

    async fn start(&self, id: &str) -> Result<(), Error>;

    /// Stop with a grace period; the engine kills the container when it expires.
    async fn stop(&self, id: &str, timeout_secs: u32) -> Result<(), Error>;
}

pub struct DockerRepo {
    docker: Docker,
}

impl DockerRepo {
    pub fn connect() -> anyhow::Result<Self> {
        let docker = Docker::connect_with_unix_defaults()?;
        Ok(Self { docker })
    }

    /// Connect to an explicit local socket path instead of the default one.
    pub fn connect_with_socket(path: &str) -> anyhow::Result<Self> {
        let docker = Docker::connect_with_socket(path, 120, bollard::API_DEFAULT_VERSION)?;
        Ok(Self { docker })
    }
}

#[async_trait]
impl EngineClient for DockerRepo {
    async fn list_containers(&self, label: &str) -> Result<Vec<ContainerInspectResponse>, Error> {
        let mut filters = HashMap::new();
        filters.insert("label".to_string(), vec![label.to_string()]);

        // The engine skips stopped containers unless `all` is set.
        let options = ListContainersOptions {
            all: true,
            filters: Some(filters),
            ..Default::default()
        };

        let summaries = self.docker.list_containers(Some(options)).await?;
        let mut containers = Vec::with_capacity(summaries.len());
        for id in summaries.iter().filter_map(|s| s.id.as_deref()) {
            containers.push(self.get_container(id).await?);
        }
        Ok(containers)
    }

    async fn get_container(&self, id: &str) -> Result<ContainerInspectResponse, Error> {
        self.docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
    }

    async fn start(&self, id: &str) -> Result<(), Error> {
        self.docker
            .start_container(id, None::<StartContainerOptions>)
            .await
    }

    async fn stop(&self, id: &str, timeout_secs: u32) -> Result<(), Error> {
        let options = StopContainerOptions {
            t: Some(i32::try_from(timeout_secs).unwrap_or(i32::MAX)),
            ..Default::default()
        };
        self.docker.stop_container(id, Some(options)).await
    }
}
