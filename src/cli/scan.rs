//! Scan commands

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::models::Scan;
use crate::client::{ListingApi, fetch_all};
use crate::error::Result;
use crate::models::ScanDisplay;
use crate::output::Formattable;

/// Fetch every scan, optionally only those still in progress.
pub async fn fetch_scans(
    api: &(impl ListingApi + ?Sized),
    active_only: bool,
    page_size: usize,
) -> Result<Vec<Scan>> {
    let active = active_only.then_some(true);
    fetch_all(
        move |params| async move { api.list_scans(active, &params).await },
        page_size,
    )
    .await
}

/// Run the scan list command
pub async fn list(opts: &GlobalOptions, active_only: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.insightvm()?;

    let scans = fetch_scans(&client, active_only, ctx.page_size()).await?;
    debug!("Fetched {} scans", scans.len());

    let display: Vec<ScanDisplay> = scans.into_iter().map(ScanDisplay::from).collect();
    display.print(ctx.format)
}
