//! Cortex XDR commands

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::XdrApi;
use crate::error::Result;
use crate::models::EndpointDisplay;
use crate::output::Formattable;

/// Run the xdr endpoints command
pub async fn endpoints(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.xdr()?;

    let endpoints = client.get_endpoints().await?;
    debug!("Fetched {} XDR endpoints", endpoints.len());

    let display: Vec<EndpointDisplay> = endpoints.into_iter().map(EndpointDisplay::from).collect();
    display.print(ctx.format)
}
