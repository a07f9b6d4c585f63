//! Bulk delete report rendering

use std::fmt::Display;

use serde::Serialize;
use tabled::Tabled;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Modify, Style, object::Rows};

use crate::bulk::{BulkResult, ItemFailure, ItemPreview};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::formatters::{or_dash, truncate};
use crate::output::json::format_json;
use crate::output::table::{format_summary, format_table};

/// Failed item row.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FailureDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ERROR")]
    pub error: String,
}

impl<Id: Display> From<&ItemFailure<Id>> for FailureDisplay {
    fn from(failure: &ItemFailure<Id>) -> Self {
        Self {
            id: failure.id.to_string(),
            name: failure.name.clone(),
            error: truncate(&failure.error, 80),
        }
    }
}

/// A [`BulkResult`] together with the labels needed to render it.
pub struct BulkReport<'a, Id> {
    pub result: &'a BulkResult<Id>,
    /// Singular resource noun (`site`)
    pub kind: &'a str,
    /// Child count column label (`assets`)
    pub child_label: &'a str,
}

impl<Id: Display> BulkReport<'_, Id> {
    /// Preview rows; the count column is named after the child label.
    fn preview_table(&self, rows: &[ItemPreview<Id>]) -> String {
        let mut builder = Builder::default();
        builder.push_record([
            "ID".to_string(),
            "NAME".to_string(),
            self.child_label.to_uppercase(),
            "DESCRIPTION".to_string(),
        ]);
        for row in rows {
            builder.push_record([
                row.id.to_string(),
                row.name.clone(),
                row.secondary_count.to_string(),
                or_dash(Some(truncate(&row.description, 40)).filter(|d| !d.is_empty())),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn summary(&self) -> String {
        let result = self.result;
        let mut rows = vec![("Requested", result.total_requested.to_string())];
        if result.dry_run {
            rows.push(("Would delete", result.preview.len().to_string()));
        } else {
            rows.push(("Deleted", result.success_count.to_string()));
        }
        rows.push(("Failed", result.failure_count.to_string()));
        format_summary(&rows)
    }
}

impl<Id: Display + Serialize> Formattable for BulkReport<'_, Id> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        if format == OutputFormat::Json {
            return Ok(format_json(self.result)?);
        }

        let result = self.result;
        let mut sections = Vec::new();

        let (heading, rows) = if result.dry_run {
            (format!("Would delete these {}s:", self.kind), &result.preview)
        } else {
            (format!("Deleted {}s:", self.kind), &result.successes)
        };
        if !rows.is_empty() {
            sections.push(format!("{}\n{}", heading, self.preview_table(rows)));
        }

        if !result.failures.is_empty() {
            let failures: Vec<FailureDisplay> =
                result.failures.iter().map(FailureDisplay::from).collect();
            sections.push(format!("Failures:\n{}", format_table(&failures)));
        }

        sections.push(self.summary());
        Ok(sections.join("\n\n"))
    }
}
