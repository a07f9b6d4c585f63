//! Id list files
//!
//! Cleanup lists usually come out of a spreadsheet export, so an id file may
//! hold one id per line, comma-separated ids, `#` comment lines and a header
//! row. Duplicates are dropped, keeping the first occurrence.

use std::collections::HashSet;
use std::path::Path;

use log::debug;

use crate::client::models::ResourceId;
use crate::error::{Error, Result};

/// Read and parse an id file.
pub fn read_id_file(path: &Path) -> Result<Vec<ResourceId>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Other(format!("Could not read id file {}: {}", path.display(), e))
    })?;
    parse_id_list(&contents)
}

/// Parse ids from text.
///
/// The first non-comment line is treated as a header and skipped when any of
/// its fields is not a number. A non-numeric field anywhere else is an error.
pub fn parse_id_list(text: &str) -> Result<Vec<ResourceId>> {
    let mut ids = Vec::new();
    let mut seen = HashSet::new();
    let mut first_row = true;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        let parsed: Vec<Option<ResourceId>> = fields.iter().map(|f| f.parse().ok()).collect();

        if first_row {
            first_row = false;
            if parsed.iter().any(Option::is_none) {
                debug!("Skipping header row: {}", line);
                continue;
            }
        }

        for (field, id) in fields.iter().zip(parsed) {
            let id = id.ok_or_else(|| {
                Error::Other(format!(
                    "Line {}: '{}' is not a numeric id",
                    index + 1,
                    field
                ))
            })?;
            if seen.insert(id) {
                ids.push(id);
            } else {
                debug!("Ignoring duplicate id {}", id);
            }
        }
    }

    Ok(ids)
}
