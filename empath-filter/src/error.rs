//! Error types for the empath-filter crate.
//!
//! A filter that cannot reach a decision returns a [`FilterError`] instead of
//! a verdict. Failures are never turned into acceptance: the session layer is
//! expected to answer with a temporary failure, see [`FilterError::status`].

use empath_common::Status;
use thiserror::Error;

/// Boxed error type a filter can surface without defining its own variant.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FilterError {
    /// One or more filters inside a composite failed.
    ///
    /// `index` is the position, in construction order, of the first failing
    /// filter and `source` is its error. `failures` counts every filter that
    /// failed during the same call.
    #[error("Mailbox filter {index} failed ({failures} failed in total): {source}")]
    Unit {
        index: usize,
        failures: usize,
        #[source]
        source: Box<FilterError>,
    },

    /// The filter could not reach a decision, e.g. a lookup service is down.
    #[error("Filter unavailable: {0}")]
    Unavailable(String),

    /// Any other error raised while evaluating a filter.
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl FilterError {
    /// Wrap an arbitrary error raised by a filter.
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(err))
    }

    /// The error raised by the filter that originally failed, looking through
    /// any number of nested composites.
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Unit { source, .. } = current {
            current = source;
        }
        current
    }

    /// The reply code to answer with when a filter fails.
    ///
    /// Always a temporary failure, so the client retries once the filter has
    /// recovered.
    #[allow(clippy::unused_self)]
    pub const fn status(&self) -> Status {
        Status::ActionUnavailable
    }
}

/// Specialized `Result` type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
