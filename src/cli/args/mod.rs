//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod global;
mod ids;
mod selection;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use ids::read_id_file;
pub use selection::{DeleteArgs, SelectionArgs, UserFilterArgs};
