//! Generic command handlers
//!
//! List and delete commands differ only in the resource they address, so
//! the flow lives here once and each command supplies a [`ResourceOps`]
//! adapter plus its display type.
//!
//! [`ResourceOps`]: crate::bulk::ResourceOps

mod delete;
mod list;

pub use delete::{DeleteSettings, run_delete};
pub use list::{resolve_items, run_list};
