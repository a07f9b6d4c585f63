//! Display models for CLI output
//!
//! API records are converted into display rows here so that column naming
//! and value formatting stay out of the command handlers.

pub mod display;

pub use display::{
    AssetDisplay, BulkReport, ComparisonDisplay, EndpointDisplay, ReportDisplay, ScanDisplay,
    SiteDisplay, UserDisplay,
};
