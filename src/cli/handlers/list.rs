//! Generic list command handler
//!
//! Standard flow:
//! 1. Resolve the selection (ids only: fetch each id; otherwise fetch every
//!    page and filter)
//! 2. Apply any command-specific predicates
//! 3. Convert to display type
//! 4. Print output

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::bulk::{
    Predicate, Resource, ResourceOps, Selection, fetch_all_items, fetch_by_ids, filter, select,
};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;

/// Fetch the records a selection refers to.
///
/// A pure id selection fetches only those ids; anything else walks the full
/// listing and filters it client-side.
pub async fn resolve_items<O: ResourceOps>(
    ops: &O,
    selection: &Selection<<O::Item as Resource>::Id>,
    page_size: usize,
) -> Result<Vec<O::Item>> {
    if let Some(ids) = &selection.ids {
        if selection.name.is_empty() && !selection.empty_only {
            debug!("Fetching {} {}s by id", ids.len(), ops.kind());
            return Ok(fetch_by_ids(ops, ids).await);
        }
    }

    let items = fetch_all_items(ops, page_size).await?;
    debug!("Fetched {} {}s", items.len(), ops.kind());

    let selected = select(ops, items, selection).await;
    debug!("{} {}s selected", selected.len(), ops.kind());
    Ok(selected)
}

/// Run a standard list command: resolve → filter → display → print.
///
/// # Type Parameters
///
/// * `O` - The resource adapter
/// * `D` - The display type that implements `From<O::Item>`, `Tabled`, and `Serialize`
pub async fn run_list<O, D>(
    ops: &O,
    selection: &Selection<<O::Item as Resource>::Id>,
    extra: &[Predicate<'_, O::Item>],
    page_size: usize,
    format: OutputFormat,
) -> Result<()>
where
    O: ResourceOps,
    D: From<O::Item> + Tabled + Serialize,
{
    let items = resolve_items(ops, selection, page_size).await?;
    let items = filter(items, extra);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(format)
}
