//! Cortex XDR models

use serde::{Deserialize, Serialize};

/// Cortex XDR endpoint (agent) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XdrEndpoint {
    /// Agent ID
    #[serde(default, alias = "endpoint_id")]
    pub agent_id: String,

    /// Host name
    #[serde(default, alias = "hostname")]
    pub host_name: Option<String>,

    /// Agent status (connected, disconnected, lost, uninstalled)
    #[serde(default, alias = "endpoint_status")]
    pub agent_status: Option<String>,

    /// Agent type (server, workstation, ...)
    #[serde(default, alias = "endpoint_type")]
    pub agent_type: Option<String>,

    /// IP addresses
    #[serde(default)]
    pub ip: Vec<String>,

    /// Last-seen timestamp in epoch milliseconds
    #[serde(default)]
    pub last_seen: Option<i64>,
}
