//! Report display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Report, ResourceId};
use crate::output::formatters::or_dash;

/// Report configuration row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportDisplay {
    #[tabled(rename = "REPORT ID")]
    pub id: ResourceId,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "FORMAT")]
    pub format: String,

    #[tabled(rename = "TEMPLATE")]
    pub template: String,
}

impl From<Report> for ReportDisplay {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            name: report.name,
            format: or_dash(report.format),
            template: or_dash(report.template),
        }
    }
}
