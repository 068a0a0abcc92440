//! Ordered, duplicate-free list of product ids held by a supplier.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicated product id: {0}")]
pub struct DuplicateProductId(pub String);

/// Product ids in insertion order, each present at most once.
///
/// Deserializing a list that repeats an id fails, so a stored or requested
/// `productIds` can never hold duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ProductIdSet(Vec<String>);

impl ProductIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Append `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove `id` if present. Returns whether it was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        self.0.len() != before
    }

    /// Distinct ids of `ids` that are not in the set, in request order.
    pub fn missing_from<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut missing = ProductIdSet::new();
        for id in ids {
            if !self.contains(id) {
                missing.insert(id);
            }
        }
        missing.0
    }

    /// Append every id not yet present. Returns how many were added.
    pub fn extend<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for id in ids {
            if self.insert(id) {
                added += 1;
            }
        }
        added
    }

    /// Remove every listed id. Returns how many were present.
    pub fn remove_all<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut removed = 0;
        for id in ids {
            if self.remove(id) {
                removed += 1;
            }
        }
        removed
    }
}

impl TryFrom<Vec<String>> for ProductIdSet {
    type Error = DuplicateProductId;

    fn try_from(ids: Vec<String>) -> Result<Self, Self::Error> {
        let mut set = ProductIdSet::new();
        for id in ids {
            if set.contains(&id) {
                return Err(DuplicateProductId(id));
            }
            set.0.push(id);
        }
        Ok(set)
    }
}

/// Collecting drops repeated ids, keeping the first occurrence.
impl<S: Into<String>> FromIterator<S> for ProductIdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ProductIdSet::new();
        set.extend(iter);
        set
    }
}

impl From<ProductIdSet> for Vec<String> {
    fn from(set: ProductIdSet) -> Self {
        set.0
    }
}
