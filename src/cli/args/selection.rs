//! Record selection and bulk delete arguments

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;

use super::read_id_file;
use crate::bulk::{NamePattern, Selection};
use crate::client::models::ResourceId;
use crate::error::Result;

/// Selectors shared by every list and delete command.
///
/// All given selectors must match (logical AND).
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Name starts with this prefix
    #[arg(long)]
    pub starts_with: Option<String>,

    /// Name ends with this suffix
    #[arg(long)]
    pub ends_with: Option<String>,

    /// Name contains this substring
    #[arg(long)]
    pub contains: Option<String>,

    /// Match name selectors case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Only these IDs (comma-separated or repeated)
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<ResourceId>,

    /// Read IDs from a file (one per line or comma-separated)
    #[arg(long, value_name = "PATH")]
    pub ids_file: Option<PathBuf>,

    /// Only records with no children (sites without assets, ...)
    #[arg(long)]
    pub empty_only: bool,
}

impl SelectionArgs {
    /// Name constraints as a pattern
    pub fn name_pattern(&self) -> NamePattern {
        let mut pattern = NamePattern::new().case_sensitive(self.case_sensitive);
        if let Some(prefix) = &self.starts_with {
            pattern = pattern.starts_with(prefix);
        }
        if let Some(suffix) = &self.ends_with {
            pattern = pattern.ends_with(suffix);
        }
        if let Some(needle) = &self.contains {
            pattern = pattern.contains(needle);
        }
        pattern
    }

    /// Build the selection, reading the id file if one was given.
    ///
    /// Ids from `--ids` come first, then the file's; repeats are dropped
    /// keeping the first occurrence.
    pub fn to_selection(&self) -> Result<Selection<ResourceId>> {
        let file_ids = match &self.ids_file {
            Some(path) => read_id_file(path)?,
            None => Vec::new(),
        };

        let mut seen = HashSet::new();
        let ids: Vec<ResourceId> = self
            .ids
            .iter()
            .chain(file_ids.iter())
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let restrict_ids = !self.ids.is_empty() || self.ids_file.is_some();
        Ok(Selection {
            name: self.name_pattern(),
            ids: restrict_ids.then_some(ids),
            empty_only: self.empty_only,
        })
    }
}

/// Switches for bulk delete commands
#[derive(Args, Debug, Default, Clone)]
pub struct DeleteArgs {
    /// Show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Stop at the first failed delete instead of carrying on
    #[arg(long)]
    pub stop_on_error: bool,
}

/// Extra filters for user listings
#[derive(Args, Debug, Default, Clone)]
pub struct UserFilterArgs {
    /// Exact login (case-insensitive)
    #[arg(long)]
    pub login: Option<String>,

    /// Only enabled (true) or disabled (false) accounts
    #[arg(long)]
    pub enabled: Option<bool>,

    /// Only locked (true) or unlocked (false) accounts
    #[arg(long)]
    pub locked: Option<bool>,

    /// Role ID, e.g. global-admin (case-insensitive)
    #[arg(long)]
    pub role: Option<String>,
}
