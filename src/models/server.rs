// Game server view model

use serde::{Deserialize, Serialize};

/// Fallback for a missing status or type label.
pub const UNKNOWN: &str = "unknown";

/// Point-in-time view of one labeled container; rebuilt on every listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub id: String,
    pub name: String,
    /// Raw engine state, e.g. "running", "exited", "created".
    pub status: String,
    pub is_running: bool,
    pub mc_type: String,
    /// "<containerPort> -> <hostIp>:<hostPort>" lines, sorted as strings.
    pub ports: Vec<String>,
}
