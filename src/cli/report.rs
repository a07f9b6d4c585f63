//! Report commands

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::models::Report;
use crate::client::{ListingApi, fetch_all};
use crate::error::Result;
use crate::models::ReportDisplay;
use crate::output::Formattable;

/// Fetch every report configuration.
pub async fn fetch_reports(
    api: &(impl ListingApi + ?Sized),
    page_size: usize,
) -> Result<Vec<Report>> {
    fetch_all(
        move |params| async move { api.list_reports(&params).await },
        page_size,
    )
    .await
}

/// Run the report list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.insightvm()?;

    let reports = fetch_reports(&client, ctx.page_size()).await?;
    debug!("Fetched {} reports", reports.len());

    let display: Vec<ReportDisplay> = reports.into_iter().map(ReportDisplay::from).collect();
    display.print(ctx.format)
}
