// Shared test helpers: an in-memory engine standing in for Docker

#![allow(dead_code)]

use async_trait::async_trait;
use bollard::errors::Error;
use bollard::models::{
    ContainerConfig, ContainerInspectResponse, ContainerState, ContainerStateStatusEnum,
    NetworkSettings, PortBinding,
};
use mcdash::docker_repo::EngineClient;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Start(String),
    Stop { id: String, timeout_secs: u32 },
}

/// Fake engine: `list_containers` honours `key=value` / `key` label filters like Docker does.
#[derive(Default)]
pub struct FakeEngine {
    pub containers: Vec<ContainerInspectResponse>,
    pub calls: Mutex<Vec<Call>>,
    /// Returned by every call instead of touching `containers`.
    pub fail_with: Mutex<Option<Error>>,
    /// Returned by start/stop only.
    pub lifecycle_error: Mutex<Option<Error>>,
}

impl FakeEngine {
    pub fn with(containers: Vec<ContainerInspectResponse>) -> Self {
        Self {
            containers,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Result<(), Error> {
        match self.fail_with.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn take_lifecycle_error(&self) -> Result<(), Error> {
        match self.lifecycle_error.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn matches_label(c: &ContainerInspectResponse, filter: &str) -> bool {
    let labels = c.config.as_ref().and_then(|cfg| cfg.labels.as_ref());
    let Some(labels) = labels else {
        return false;
    };
    match filter.split_once('=') {
        Some((key, value)) => labels.get(key).is_some_and(|v| v == value),
        None => labels.contains_key(filter),
    }
}

pub fn not_found(id: &str) -> Error {
    Error::DockerResponseServerError {
        status_code: 404,
        message: format!("No such container: {id}"),
    }
}

#[async_trait]
impl EngineClient for FakeEngine {
    async fn list_containers(&self, label: &str) -> Result<Vec<ContainerInspectResponse>, Error> {
        self.take_failure()?;
        Ok(self
            .containers
            .iter()
            .filter(|c| matches_label(c, label))
            .cloned()
            .collect())
    }

    async fn get_container(&self, id: &str) -> Result<ContainerInspectResponse, Error> {
        self.take_failure()?;
        self.containers
            .iter()
            .find(|c| {
                c.id.as_deref() == Some(id)
                    || c.name.as_deref().map(|n| n.trim_start_matches('/')) == Some(id)
            })
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn start(&self, id: &str) -> Result<(), Error> {
        self.calls.lock().unwrap().push(Call::Start(id.to_string()));
        self.take_lifecycle_error()
    }

    async fn stop(&self, id: &str, timeout_secs: u32) -> Result<(), Error> {
        self.calls.lock().unwrap().push(Call::Stop {
            id: id.to_string(),
            timeout_secs,
        });
        self.take_lifecycle_error()
    }
}

/// Builder for raw inspect payloads.
pub struct ContainerBuilder {
    inner: ContainerInspectResponse,
}

pub fn container(id: &str, name: &str) -> ContainerBuilder {
    ContainerBuilder {
        inner: ContainerInspectResponse {
            id: Some(id.to_string()),
            name: Some(format!("/{name}")),
            ..Default::default()
        },
    }
}

impl ContainerBuilder {
    pub fn status(mut self, status: ContainerStateStatusEnum) -> Self {
        self.inner.state = Some(ContainerState {
            status: Some(status),
            ..Default::default()
        });
        self
    }

    pub fn label(mut self, key: &str, value: &str) -> Self {
        let config = self.inner.config.get_or_insert_with(ContainerConfig::default);
        config
            .labels
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Mark the container discoverable (`mc.platform=true`).
    pub fn platform(self) -> Self {
        self.label("mc.platform", "true")
    }

    pub fn port(mut self, container_port: &str, bindings: Option<Vec<(&str, &str)>>) -> Self {
        let settings = self
            .inner
            .network_settings
            .get_or_insert_with(NetworkSettings::default);
        let bindings = bindings.map(|b| {
            b.into_iter()
                .map(|(ip, port)| PortBinding {
                    host_ip: Some(ip.to_string()),
                    host_port: Some(port.to_string()),
                })
                .collect()
        });
        settings
            .ports
            .get_or_insert_with(HashMap::new)
            .insert(container_port.to_string(), bindings);
        self
    }

    pub fn build(self) -> ContainerInspectResponse {
        self.inner
    }
}
