//! Cortex XDR endpoint display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::XdrEndpoint;
use crate::output::formatters::{format_epoch_millis_local, or_dash};

/// Endpoint row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EndpointDisplay {
    #[tabled(rename = "AGENT ID")]
    pub agent_id: String,

    #[tabled(rename = "HOST NAME")]
    pub host_name: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "TYPE")]
    pub agent_type: String,

    #[tabled(rename = "IP")]
    pub ip: String,

    #[tabled(rename = "LAST SEEN")]
    pub last_seen: String,
}

impl From<XdrEndpoint> for EndpointDisplay {
    fn from(endpoint: XdrEndpoint) -> Self {
        let ip = if endpoint.ip.is_empty() {
            "--".to_string()
        } else {
            endpoint.ip.join(", ")
        };

        Self {
            agent_id: endpoint.agent_id,
            host_name: or_dash(endpoint.host_name),
            status: or_dash(endpoint.agent_status),
            agent_type: or_dash(endpoint.agent_type),
            ip,
            last_seen: format_epoch_millis_local(endpoint.last_seen),
        }
    }
}
