//! Bulk delete with preview and per-item failure accounting

use log::{debug, error, info};
use serde::Serialize;

use super::{Resource, ResourceOps};

/// Placeholder name recorded when an item could not be looked up.
pub const UNRETRIEVABLE_NAME: &str = "Could not retrieve";

/// Behaviour switches for [`mass_delete`].
///
/// The default is the safe one: a dry run that keeps going past failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOptions {
    /// Describe what would be deleted without deleting anything
    pub dry_run: bool,
    /// Keep processing after a per-item failure
    pub continue_on_error: bool,
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self {
            dry_run: true,
            continue_on_error: true,
        }
    }
}

impl BulkOptions {
    /// Dry run that never stops early
    pub fn preview() -> Self {
        Self::default()
    }

    /// Live run
    pub fn live(continue_on_error: bool) -> Self {
        Self {
            dry_run: false,
            continue_on_error,
        }
    }
}

/// What would be (or was) deleted for one id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPreview<Id> {
    pub id: Id,
    pub name: String,
    /// Child count at lookup time (assets in a site, ...)
    pub secondary_count: u64,
    pub description: String,
}

/// One id that could not be processed.
///
/// When the lookup itself failed, `name` is [`UNRETRIEVABLE_NAME`] and the
/// count and description are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure<Id> {
    pub id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub error: String,
}

impl<Id> ItemFailure<Id> {
    fn unretrievable(id: Id, error: String) -> Self {
        Self {
            id,
            name: UNRETRIEVABLE_NAME.to_string(),
            secondary_count: None,
            description: None,
            error,
        }
    }

    fn from_preview(preview: ItemPreview<Id>, error: String) -> Self {
        Self {
            id: preview.id,
            name: preview.name,
            secondary_count: Some(preview.secondary_count),
            description: Some(preview.description),
            error,
        }
    }
}

/// Outcome of a bulk delete.
///
/// Entries are appended as ids are processed, so every list keeps input
/// order. An early stop leaves the result holding everything up to the
/// failing id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkResult<Id> {
    pub dry_run: bool,
    pub total_requested: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub successes: Vec<ItemPreview<Id>>,
    pub failures: Vec<ItemFailure<Id>>,
    pub preview: Vec<ItemPreview<Id>>,
}

impl<Id> BulkResult<Id> {
    fn new(dry_run: bool, total_requested: usize) -> Self {
        Self {
            dry_run,
            total_requested,
            success_count: 0,
            failure_count: 0,
            successes: Vec::new(),
            failures: Vec::new(),
            preview: Vec::new(),
        }
    }

    fn record_failure(&mut self, failure: ItemFailure<Id>) {
        self.failures.push(failure);
        self.failure_count += 1;
    }

    fn record_success(&mut self, preview: ItemPreview<Id>) {
        self.successes.push(preview);
        self.success_count += 1;
    }

    /// True when every requested id was handled without error.
    pub fn is_clean(&self) -> bool {
        self.failure_count == 0
    }
}

/// Look up and describe one id.
async fn describe<O: ResourceOps>(
    ops: &O,
    id: &<O::Item as Resource>::Id,
) -> crate::error::Result<ItemPreview<<O::Item as Resource>::Id>> {
    let item = ops.get(id).await?;
    let secondary_count = ops.child_count(id).await?;
    Ok(ItemPreview {
        id: id.clone(),
        name: item.name().to_string(),
        secondary_count,
        description: item.description().to_string(),
    })
}

/// Delete each id in order, isolating per-item failures.
///
/// Every id is looked up and described first; the description becomes its
/// preview entry. In a dry run nothing else happens. In a live run the item
/// is then deleted. With `continue_on_error` off, a live run stops at the
/// first failure; a dry run always describes every id.
pub async fn mass_delete<O: ResourceOps>(
    ops: &O,
    ids: &[<O::Item as Resource>::Id],
    options: BulkOptions,
) -> BulkResult<<O::Item as Resource>::Id> {
    let mut result = BulkResult::new(options.dry_run, ids.len());

    for id in ids {
        let preview = match describe(ops, id).await {
            Ok(preview) => preview,
            Err(e) => {
                error!("Could not retrieve {} {}: {}", ops.kind(), id, e);
                result.record_failure(ItemFailure::unretrievable(id.clone(), e.to_string()));
                if !options.continue_on_error && !options.dry_run {
                    break;
                }
                continue;
            }
        };

        result.preview.push(preview.clone());

        if options.dry_run {
            debug!(
                "Would delete {} {} ({}, {} {})",
                ops.kind(),
                id,
                preview.name,
                preview.secondary_count,
                ops.child_label()
            );
            continue;
        }

        match ops.delete(id).await {
            Ok(()) => {
                info!("Deleted {} {} ({})", ops.kind(), id, preview.name);
                result.record_success(preview);
            }
            Err(e) => {
                error!("Failed to delete {} {}: {}", ops.kind(), id, e);
                result.record_failure(ItemFailure::from_preview(preview, e.to_string()));
                if !options.continue_on_error {
                    break;
                }
            }
        }
    }

    result
}
