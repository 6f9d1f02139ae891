//! Error taxonomy.
//!
//! One enum per boundary: [`NetworkError`] for graph construction,
//! [`SearchError`] for the path walks, [`DatasetError`] for tabular
//! ingestion. Every error is surfaced to the immediate caller; there is no
//! retry or silent recovery anywhere in the crate.

use thiserror::Error;

/// Errors raised while building a road network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// An edge referenced a name that was never added as a node.
    #[error("no node named '{0}' in the network")]
    MissingNode(String),
}

/// Errors raised during a path search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A search endpoint named a location absent from the network.
    #[error("no node named '{0}' in the network")]
    MissingNode(String),
    /// The walk reached a location with no outgoing roads before reaching
    /// the destination.
    #[error("no road leaves '{0}'; destination unreachable")]
    NoPath(String),
    /// A bounded walk exhausted its step ceiling.
    #[error("search gave up after {0} steps")]
    StepLimitExceeded(usize),
}

/// Errors raised while loading tabular datasets.
///
/// Loader boundary only; the core models and searches never produce this.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A row was malformed or a file could not be read.
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    /// An edge row referenced a name with no node row.
    #[error(transparent)]
    Network(#[from] NetworkError),
}
