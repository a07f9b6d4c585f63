//! Resource-agnostic fetch → filter → mutate helpers
//!
//! Every InsightVM resource that supports bulk cleanup supplies the same four
//! collaborators through [`ResourceOps`]: list one page, get one item, delete
//! one item, and count an item's children. The helpers in this module are
//! written once against that trait:
//!
//! - [`fetch_all_items`] - walk every page of the listing
//! - [`filter`] - client-side predicates combined with AND
//! - [`mutate::mass_delete`] - per-item delete with dry-run and failure isolation

use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use serde::Serialize;

use crate::client::pagination::{Page, PageParams, fetch_all};
use crate::error::Result;

pub mod filter;
pub mod mutate;
pub mod resources;

pub use filter::{NamePattern, Predicate, Selection, fetch_by_ids, select};
pub use mutate::{BulkOptions, BulkResult, ItemFailure, ItemPreview, mass_delete};
pub use resources::{AssetOps, SiteOps, UserOps};

/// A record the bulk helpers can address by id and name.
///
/// Everything else about the record is opaque to filtering and deletion.
pub trait Resource {
    /// Identifier type
    type Id: Clone + Eq + Hash + Display + Debug + Serialize + Send + Sync;

    /// The record's identifier
    fn id(&self) -> Self::Id;

    /// The name used by name-pattern filters
    fn name(&self) -> &str;

    /// Free-text description shown in previews
    fn description(&self) -> &str {
        ""
    }
}

/// Per-resource collaborators consumed by the bulk helpers.
#[async_trait]
pub trait ResourceOps: Send + Sync {
    /// Record type returned by the listing and get endpoints
    type Item: Resource + Send + Sync;

    /// Singular noun used in log and error messages (`site`)
    fn kind(&self) -> &'static str;

    /// What [`ResourceOps::child_count`] counts (`assets`)
    fn child_label(&self) -> &'static str;

    /// Fetch one page of the listing
    async fn list_page(&self, params: PageParams) -> Result<Page<Self::Item>>;

    /// Fetch one record by id
    async fn get(&self, id: &<Self::Item as Resource>::Id) -> Result<Self::Item>;

    /// Delete one record by id
    async fn delete(&self, id: &<Self::Item as Resource>::Id) -> Result<()>;

    /// Number of child records (assets in a site, ...)
    async fn child_count(&self, id: &<Self::Item as Resource>::Id) -> Result<u64>;
}

/// Fetch every record of a resource.
pub async fn fetch_all_items<O: ResourceOps>(ops: &O, page_size: usize) -> Result<Vec<O::Item>> {
    fetch_all(move |params| ops.list_page(params), page_size).await
}

/// Keep the items for which every predicate holds, preserving order.
pub fn filter<T>(items: Vec<T>, predicates: &[Predicate<'_, T>]) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| predicates.iter().all(|p| p(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulk::filter::{id_in, name_matches};
    use crate::client::mock::{MockInsightVm, site};

    #[tokio::test]
    async fn test_fetch_all_items_walks_every_page() {
        let sites: Vec<_> = (1..=7).map(|id| site(id, &format!("site-{id}"))).collect();
        let mock = MockInsightVm::new().with_sites(sites.clone());
        let ops = SiteOps::new(&mock);

        let all = fetch_all_items(&ops, 3).await.unwrap();

        assert_eq!(all, sites);
        assert_eq!(mock.call_counts().await.list_sites, 3);
    }

    #[test]
    fn test_filter_without_predicates_keeps_everything() {
        let items = vec![site(1, "a"), site(2, "b")];
        let result = filter(items.clone(), &[]);
        assert_eq!(result, items);
    }

    #[test]
    fn test_filter_is_logical_and() {
        let items = vec![site(1, "sn_a"), site(2, "sn_b"), site(3, "other")];
        let predicates: Vec<Predicate<'_, _>> = vec![
            name_matches(NamePattern::new().starts_with("sn_")),
            id_in([1, 3]),
        ];

        let result = filter(items, &predicates);

        assert_eq!(result, vec![site(1, "sn_a")]);
    }
}
