//! Display model implementations for table and JSON output

mod asset;
mod bulk;
mod compare;
mod report;
mod scan;
mod site;
mod user;
mod xdr;

pub use asset::AssetDisplay;
pub use bulk::BulkReport;
pub use compare::ComparisonDisplay;
pub use report::ReportDisplay;
pub use scan::ScanDisplay;
pub use site::SiteDisplay;
pub use user::UserDisplay;
pub use xdr::EndpointDisplay;
