//! API trait definitions split by resource
//!
//! The InsightVM surface is organized into focused sub-traits:
//! - [`SiteApi`] - sites and their assets
//! - [`AssetApi`] - assets, asset search and vulnerabilities
//! - [`UserApi`] - user accounts and their site access
//! - [`ListingApi`] - read-only listings (reports, scans)
//!
//! Cortex XDR is a separate service with its own [`XdrApi`].

mod asset;
mod listing;
mod site;
mod user;
mod xdr;

pub use asset::AssetApi;
pub use listing::ListingApi;
pub use site::SiteApi;
pub use user::UserApi;
pub use xdr::XdrApi;
