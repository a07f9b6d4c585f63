//! Generic bulk delete command handler
//!
//! Flow:
//! 1. Resolve target ids from the selection
//! 2. Dry-run pass to describe every target
//! 3. Stop there for `--dry-run`, otherwise confirm
//! 4. Live pass, print the result, fail the command if any item failed
//!
//! The live pass looks every id up again (get plus child count) before
//! deleting it, so a confirmed delete costs about twice the requests of the
//! preview. The second lookup reports ids that vanished in between.

use colored::Colorize;
use dialoguer::Confirm;

use super::resolve_items;
use crate::bulk::{BulkOptions, BulkResult, Resource, ResourceOps, Selection, mass_delete};
use crate::cli::OutputFormat;
use crate::cli::args::DeleteArgs;
use crate::error::{Error, Result};
use crate::models::BulkReport;
use crate::output::Formattable;

/// Settings resolved from global options and config
#[derive(Debug, Clone, Copy)]
pub struct DeleteSettings {
    pub format: OutputFormat,
    pub page_size: usize,
    /// Ask before the live pass
    pub prompt: bool,
}

fn report<'a, O: ResourceOps>(
    ops: &'a O,
    result: &'a BulkResult<<O::Item as Resource>::Id>,
) -> BulkReport<'a, <O::Item as Resource>::Id> {
    BulkReport {
        result,
        kind: ops.kind(),
        child_label: ops.child_label(),
    }
}

/// Run a bulk delete command.
///
/// A selection with no constraints at all is refused rather than treated as
/// "everything".
pub async fn run_delete<O: ResourceOps>(
    ops: &O,
    selection: &Selection<<O::Item as Resource>::Id>,
    args: &DeleteArgs,
    settings: DeleteSettings,
) -> Result<()> {
    let kind = ops.kind();

    if selection.is_unrestricted() {
        return Err(Error::Other(format!(
            "Refusing to delete every {kind}. Select targets with --ids, --ids-file, a name filter or --empty-only."
        )));
    }

    // Explicit ids go straight to the mutator so unknown ids are reported.
    let ids = match &selection.ids {
        Some(ids) if selection.name.is_empty() && !selection.empty_only => ids.clone(),
        _ => resolve_items(ops, selection, settings.page_size)
            .await?
            .iter()
            .map(|item| item.id())
            .collect(),
    };

    if ids.is_empty() {
        eprintln!("No matching {}s.", kind);
        return Ok(());
    }

    let preview = mass_delete(ops, &ids, BulkOptions::preview()).await;

    if args.dry_run {
        eprintln!("{}", "DRY RUN - no changes will be made".yellow());
        eprintln!();
        return report(ops, &preview).print(settings.format);
    }

    if preview.preview.is_empty() {
        report(ops, &preview).print(settings.format)?;
        return Err(Error::Other(format!(
            "None of the requested {kind}s could be retrieved"
        )));
    }

    if settings.prompt {
        eprintln!("{}", report(ops, &preview).format(OutputFormat::Table)?);
        eprintln!();
        eprintln!(
            "{} Delete {} {}s? This cannot be undone.",
            "⚠".yellow(),
            preview.preview.len(),
            kind
        );

        let confirm = Confirm::new()
            .with_prompt("Confirm deletion?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    let result = mass_delete(ops, &ids, BulkOptions::live(!args.stop_on_error)).await;
    report(ops, &result).print(settings.format)?;

    if !result.is_clean() {
        return Err(Error::Other(format!(
            "{} of {} {} deletions failed",
            result.failure_count, result.total_requested, kind
        )));
    }

    eprintln!("{} Deleted {} {}s", "✓".green(), result.success_count, kind);
    Ok(())
}
