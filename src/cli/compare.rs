//! Cortex XDR / InsightVM asset comparison
//!
//! Every XDR endpoint with a host name is looked up in InsightVM by an exact
//! `host-name is` asset search. A failed search marks that host as unknown
//! and the walk carries on with the next one.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::models::{AssetSearch, ResourceId};
use crate::client::{AssetApi, XdrApi, fetch_all};
use crate::error::Result;
use crate::models::ComparisonDisplay;
use crate::output::Formattable;

/// Whether InsightVM knows an XDR host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Found,
    Missing,
    /// The search itself failed
    Unknown,
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Presence::Found => "found",
            Presence::Missing => "missing",
            Presence::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// Comparison outcome for one XDR endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostComparison {
    pub host_name: String,
    pub agent_id: String,
    pub agent_status: Option<String>,
    pub presence: Presence,
    /// Matching InsightVM asset ids
    pub asset_ids: Vec<ResourceId>,
}

/// Compare every XDR endpoint against InsightVM assets.
///
/// Only the endpoint listing can fail the comparison as a whole.
pub async fn compare_hosts<X, V>(xdr: &X, ivm: &V, page_size: usize) -> Result<Vec<HostComparison>>
where
    X: XdrApi + ?Sized,
    V: AssetApi + ?Sized,
{
    let endpoints = xdr.get_endpoints().await?;
    debug!("Comparing {} XDR endpoints", endpoints.len());

    let mut rows = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        let Some(host_name) = endpoint
            .host_name
            .filter(|h| !h.trim().is_empty())
        else {
            debug!("Skipping endpoint {} without a host name", endpoint.agent_id);
            continue;
        };

        let search = AssetSearch::host_name_is(&host_name);
        let search = &search;
        let (presence, asset_ids) = match fetch_all(
            move |params| async move { ivm.search_assets(search, &params).await },
            page_size,
        )
        .await
        {
            Ok(assets) if assets.is_empty() => (Presence::Missing, Vec::new()),
            Ok(assets) => (
                Presence::Found,
                assets.iter().map(|asset| asset.id).collect(),
            ),
            Err(e) => {
                warn!("Asset search for {} failed: {}", host_name, e);
                (Presence::Unknown, Vec::new())
            }
        };

        rows.push(HostComparison {
            host_name,
            agent_id: endpoint.agent_id,
            agent_status: endpoint.agent_status,
            presence,
            asset_ids,
        });
    }

    Ok(rows)
}

/// Run the compare command
pub async fn run(opts: &GlobalOptions, missing_only: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let xdr = ctx.xdr()?;
    let ivm = ctx.insightvm()?;

    let mut rows = compare_hosts(&xdr, &ivm, ctx.page_size()).await?;
    if missing_only {
        rows.retain(|row| row.presence == Presence::Missing);
    }

    let display: Vec<ComparisonDisplay> = rows.into_iter().map(ComparisonDisplay::from).collect();
    display.print(ctx.format)
}
