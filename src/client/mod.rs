//! InsightVM and Cortex XDR API clients

pub mod api;
pub mod insightvm;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
mod response;
pub mod xdr;

pub use api::{AssetApi, ListingApi, XdrApi};
pub use insightvm::InsightVmClient;
pub use pagination::fetch_all;
pub use xdr::XdrClient;
