// Caller-facing error taxonomy for discovery and lifecycle calls.

use bollard::errors::Error as EngineFailure;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The referenced container does not exist (engine answered 404).
    #[error("Container not found")]
    NotFound { id: String },

    /// The engine rejected or failed the request; carries its explanation.
    #[error("Docker API error: {0}")]
    Engine(String),

    #[error(transparent)]
    Other(EngineFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Engine,
    Other,
}

impl ServerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServerError::NotFound { .. } => ErrorKind::NotFound,
            ServerError::Engine(_) => ErrorKind::Engine,
            ServerError::Other(_) => ErrorKind::Other,
        }
    }

    /// Classify a raw engine error. `id` names the container the call referred to, if any.
    pub(crate) fn from_engine(e: EngineFailure, id: &str) -> Self {
        match e {
            EngineFailure::DockerResponseServerError { status_code, .. } if status_code == 404 => {
                ServerError::NotFound { id: id.to_string() }
            }
            EngineFailure::DockerResponseServerError { message, .. } => {
                ServerError::Engine(message)
            }
            EngineFailure::IOError { .. }
            | EngineFailure::HyperResponseError { .. }
            | EngineFailure::HyperLegacyError { .. }
            | EngineFailure::RequestTimeoutError => ServerError::Engine(e.to_string()),
            other => ServerError::Other(other),
        }
    }

    /// Classify a failure of the listing as a whole. A 404 there means a container
    /// vanished between list and inspect, which is an engine failure, not a missing resource.
    pub(crate) fn from_listing(e: EngineFailure) -> Self {
        match e {
            EngineFailure::DockerResponseServerError { message, .. } => {
                ServerError::Engine(message)
            }
            other => ServerError::from_engine(other, ""),
        }
    }
}

/// Engine reply to start/stop when the container is already in the requested state.
pub(crate) fn is_not_modified(e: &EngineFailure) -> bool {
    matches!(
        e,
        EngineFailure::DockerResponseServerError { status_code, .. } if *status_code == 304
    )
}
