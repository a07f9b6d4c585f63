//! Client-side predicate filters
//!
//! Filters run over records that have already been fetched. Name and id
//! filters are plain predicates; the emptiness filter needs one child-count
//! lookup per record and is therefore async. Lookups that fail while
//! filtering are logged and the record is left out: filtering is best-effort
//! and never fails a whole report because one record was unreachable.

use std::collections::HashSet;

use log::{debug, warn};

use super::{Resource, ResourceOps};

/// Boxed record predicate
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + Send + Sync + 'a>;

/// Name pattern with optional prefix, suffix and substring constraints.
///
/// All set constraints must match. Matching ignores case unless
/// [`NamePattern::case_sensitive`] is set. An empty pattern matches every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePattern {
    pub starts_with: Option<String>,
    pub ends_with: Option<String>,
    pub contains: Option<String>,
    pub case_sensitive: bool,
}

impl NamePattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    pub fn ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.ends_with = Some(suffix.into());
        self
    }

    pub fn contains(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.starts_with.is_none() && self.ends_with.is_none() && self.contains.is_none()
    }

    /// Check a name against every set constraint.
    pub fn matches(&self, name: &str) -> bool {
        let fold = |s: &str| {
            if self.case_sensitive {
                s.to_string()
            } else {
                s.to_lowercase()
            }
        };
        let name = fold(name);

        self.starts_with
            .as_deref()
            .is_none_or(|prefix| name.starts_with(&fold(prefix)))
            && self
                .ends_with
                .as_deref()
                .is_none_or(|suffix| name.ends_with(&fold(suffix)))
            && self
                .contains
                .as_deref()
                .is_none_or(|needle| name.contains(&fold(needle)))
    }
}

/// Predicate matching a record's name against `pattern`.
pub fn name_matches<'a, T: Resource + 'a>(pattern: NamePattern) -> Predicate<'a, T> {
    Box::new(move |item: &T| pattern.matches(item.name()))
}

/// Predicate matching records whose id is in `ids`.
pub fn id_in<'a, T>(ids: impl IntoIterator<Item = T::Id>) -> Predicate<'a, T>
where
    T: Resource + 'a,
{
    let ids: HashSet<T::Id> = ids.into_iter().collect();
    Box::new(move |item: &T| ids.contains(&item.id()))
}

/// Fetch each id individually, skipping ids whose lookup fails.
///
/// Results follow the order of `ids`.
pub async fn fetch_by_ids<O: ResourceOps>(
    ops: &O,
    ids: &[<O::Item as Resource>::Id],
) -> Vec<O::Item> {
    let mut found = Vec::with_capacity(ids.len());
    for id in ids {
        match ops.get(id).await {
            Ok(item) => found.push(item),
            Err(e) => warn!("Could not retrieve {} {}: {}", ops.kind(), id, e),
        }
    }
    found
}

/// Keep the records whose child count is exactly zero.
///
/// A record whose count cannot be read is excluded: an unknown count is
/// never reported as empty.
pub async fn select_empty<O: ResourceOps>(ops: &O, items: Vec<O::Item>) -> Vec<O::Item> {
    let mut empty = Vec::new();
    for item in items {
        let id = item.id();
        match ops.child_count(&id).await {
            Ok(0) => empty.push(item),
            Ok(count) => debug!("{} {} has {} {}", ops.kind(), id, count, ops.child_label()),
            Err(e) => warn!(
                "Could not check {} for {} {}: {}",
                ops.child_label(),
                ops.kind(),
                id,
                e
            ),
        }
    }
    empty
}

/// Combined selection criteria; a record is selected only if it satisfies
/// every constraint that is set.
#[derive(Debug, Clone)]
pub struct Selection<Id> {
    /// Name constraints
    pub name: NamePattern,
    /// Restrict to these ids
    pub ids: Option<Vec<Id>>,
    /// Restrict to records with zero children
    pub empty_only: bool,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            name: NamePattern::default(),
            ids: None,
            empty_only: false,
        }
    }
}

impl<Id> Selection<Id> {
    /// True when nothing narrows the selection.
    pub fn is_unrestricted(&self) -> bool {
        self.name.is_empty() && self.ids.is_none() && !self.empty_only
    }
}

/// Apply a [`Selection`] to an already-fetched collection.
///
/// Name and id constraints are checked first so the per-record child-count
/// lookups only run for records that could still be selected.
pub async fn select<O: ResourceOps>(
    ops: &O,
    items: Vec<O::Item>,
    selection: &Selection<<O::Item as Resource>::Id>,
) -> Vec<O::Item> {
    let mut predicates: Vec<Predicate<'_, O::Item>> = Vec::new();
    if !selection.name.is_empty() {
        predicates.push(name_matches(selection.name.clone()));
    }
    if let Some(ids) = &selection.ids {
        predicates.push(id_in(ids.iter().cloned()));
    }

    let matched = super::filter(items, &predicates);

    if selection.empty_only {
        select_empty(ops, matched).await
    } else {
        matched
    }
}
