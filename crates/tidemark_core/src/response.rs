//! Per-user result mappings for batched operations.

use crate::types::UserId;
use std::collections::BTreeMap;

/// The result of a batched operation: one value per addressed user.
///
/// Every engine operation applies independently to each user in the
/// batch and collects its per-user outcome here. An empty batch yields
/// an empty response, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response<T> {
    results: BTreeMap<UserId, T>,
}

impl<T> Response<T> {
    /// Creates an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: BTreeMap::new(),
        }
    }

    /// Records the result for one user.
    pub fn push(&mut self, user_id: UserId, result: T) {
        self.results.insert(user_id, result);
    }

    /// The result for one user, if they were part of the batch.
    #[must_use]
    pub fn get(&self, user_id: impl Into<UserId>) -> Option<&T> {
        self.results.get(&user_id.into())
    }

    /// Number of users in the response.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no users were addressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over `(user, result)` pairs in user-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &T)> {
        self.results.iter()
    }

    /// Consumes the response, yielding the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<UserId, T> {
        self.results
    }

    /// The single result of a batch-of-one, consuming the response.
    ///
    /// Returns `None` unless exactly one user was addressed.
    #[must_use]
    pub fn into_single(self) -> Option<T> {
        if self.results.len() == 1 {
            self.results.into_values().next()
        } else {
            None
        }
    }
}

impl Response<bool> {
    /// Returns `true` iff every per-user result is `true`.
    #[must_use]
    pub fn all(&self) -> bool {
        self.results.values().all(|v| *v)
    }

    /// Returns `true` iff at least one per-user result is `true`.
    #[must_use]
    pub fn any(&self) -> bool {
        self.results.values().any(|v| *v)
    }
}

impl<T> FromIterator<(UserId, T)> for Response<T> {
    fn from_iter<I: IntoIterator<Item = (UserId, T)>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Response<T> {
    type Item = (UserId, T);
    type IntoIter = std::collections::btree_map::IntoIter<UserId, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
