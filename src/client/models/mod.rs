//! InsightVM and Cortex XDR data models
//!
//! This module contains the domain types returned by both APIs.
//! Models are organized by resource type for easy discovery.

mod asset;
mod report;
mod scan;
mod site;
mod user;
mod xdr;

/// Identifier type shared by every InsightVM resource
pub type ResourceId = i64;

pub use asset::{Asset, AssetSearch};
pub use report::Report;
pub use scan::Scan;
pub use site::Site;
pub use user::User;
pub use xdr::XdrEndpoint;
