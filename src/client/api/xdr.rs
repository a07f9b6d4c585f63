//! Cortex XDR API trait

use async_trait::async_trait;

use crate::client::models::XdrEndpoint;
use crate::error::Result;

/// Cortex XDR public API
#[async_trait]
pub trait XdrApi: Send + Sync {
    /// Every endpoint (agent) registered with the tenant
    async fn get_endpoints(&self) -> Result<Vec<XdrEndpoint>>;
}
