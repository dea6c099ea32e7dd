//! Combines several filters into one.
//!
//! Every filter in a [`CompositeFilter`] is consulted on every call, all of
//! them concurrently, and the answers are folded into the most restrictive
//! verdict:
//!
//! | Filter answers                          | Composite answers |
//! |-----------------------------------------|-------------------|
//! | `Yes`, `Yes`, `Yes`                     | `Yes`             |
//! | `Yes`, `NoTemporarily`, `Yes`           | `NoTemporarily`   |
//! | `NoPermanently`, `NoTemporarily`, `Yes` | `NoPermanently`   |
//! | `Yes`, *error*, `Yes`                   | *error*           |
//! | *(no filters)*                          | `Yes`             |
//!
//! A filter that fails fails the whole call; its opinion is never dropped
//! from the reduction.

use std::{fmt, net::SocketAddr, sync::Arc};

use async_trait::async_trait;
use empath_common::Mailbox;
use futures_util::future::join_all;

use crate::{FilterError, MailboxFilter, Result, Verdict};

/// A [`MailboxFilter`] that asks every filter it holds and answers with the
/// most restrictive verdict.
///
/// The set of filters is fixed at construction. Filters are shared, so the
/// same filter may sit in several composites, and a composite may be nested
/// inside another. Cloning is cheap and every clone sees the same filters.
#[derive(Clone)]
pub struct CompositeFilter {
    filters: Arc<[Arc<dyn MailboxFilter>]>,
}

impl CompositeFilter {
    /// Create a composite consulting `filters`.
    #[must_use]
    pub fn new(filters: Vec<Arc<dyn MailboxFilter>>) -> Self {
        Self {
            filters: filters.into(),
        }
    }

    /// A composite without filters, which accepts everything.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// The filters consulted, in construction order.
    pub fn filters(&self) -> &[Arc<dyn MailboxFilter>] {
        &self.filters
    }

    /// Fold the answers of every filter into one.
    ///
    /// `results` is in construction order, so the reported failure is always
    /// the first failing filter regardless of which finished first.
    fn reduce(results: Vec<Result<Verdict>>) -> Result<Verdict> {
        let total = results.len();
        let mut verdicts = Vec::with_capacity(total);
        let mut failed = Vec::new();

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(verdict) => verdicts.push(verdict),
                Err(err) => failed.push((index, err)),
            }
        }

        let failures = failed.len();
        if let Some((index, source)) = failed.into_iter().next() {
            return Err(FilterError::Unit {
                index,
                failures,
                source: Box::new(source),
            });
        }

        Ok(Verdict::most_restrictive(verdicts))
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for CompositeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl From<Vec<Arc<dyn MailboxFilter>>> for CompositeFilter {
    fn from(filters: Vec<Arc<dyn MailboxFilter>>) -> Self {
        Self::new(filters)
    }
}

impl From<Option<Vec<Arc<dyn MailboxFilter>>>> for CompositeFilter {
    fn from(filters: Option<Vec<Arc<dyn MailboxFilter>>>) -> Self {
        filters.map_or_else(Self::empty, Self::new)
    }
}

impl FromIterator<Arc<dyn MailboxFilter>> for CompositeFilter {
    fn from_iter<I: IntoIterator<Item = Arc<dyn MailboxFilter>>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl MailboxFilter for CompositeFilter {
    #[tracing::instrument(level = "trace", skip_all, fields(filters = self.filters.len()))]
    async fn can_accept_from(
        &self,
        peer: &SocketAddr,
        from: &Mailbox,
        size: usize,
    ) -> Result<Verdict> {
        if self.filters.is_empty() {
            return Ok(Verdict::Yes);
        }

        let results = join_all(
            self.filters
                .iter()
                .map(|filter| filter.can_accept_from(peer, from, size)),
        )
        .await;

        Self::reduce(results)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(filters = self.filters.len()))]
    async fn can_deliver_to(&self, to: &Mailbox, from: &Mailbox) -> Result<Verdict> {
        if self.filters.is_empty() {
            return Ok(Verdict::Yes);
        }

        let results = join_all(
            self.filters
                .iter()
                .map(|filter| filter.can_deliver_to(to, from)),
        )
        .await;

        Self::reduce(results)
    }
}
